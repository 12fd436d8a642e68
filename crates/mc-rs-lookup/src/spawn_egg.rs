//! Spawn egg items and the entity types they spawn.
//!
//! The mapping is one-to-one, so it can be read in both directions.

use std::collections::HashMap;
use std::sync::LazyLock;

/// (spawn egg item, entity type) pairs.
const SPAWN_EGGS: &[(&str, &str)] = &[
    ("minecraft:bat_spawn_egg", "minecraft:bat"),
    ("minecraft:blaze_spawn_egg", "minecraft:blaze"),
    ("minecraft:cat_spawn_egg", "minecraft:cat"),
    ("minecraft:cave_spider_spawn_egg", "minecraft:cave_spider"),
    ("minecraft:chicken_spawn_egg", "minecraft:chicken"),
    ("minecraft:cod_spawn_egg", "minecraft:cod"),
    ("minecraft:cow_spawn_egg", "minecraft:cow"),
    ("minecraft:creeper_spawn_egg", "minecraft:creeper"),
    ("minecraft:dolphin_spawn_egg", "minecraft:dolphin"),
    ("minecraft:donkey_spawn_egg", "minecraft:donkey"),
    ("minecraft:drowned_spawn_egg", "minecraft:drowned"),
    ("minecraft:elder_guardian_spawn_egg", "minecraft:elder_guardian"),
    ("minecraft:enderman_spawn_egg", "minecraft:enderman"),
    ("minecraft:endermite_spawn_egg", "minecraft:endermite"),
    ("minecraft:evoker_spawn_egg", "minecraft:evoker"),
    ("minecraft:fox_spawn_egg", "minecraft:fox"),
    ("minecraft:ghast_spawn_egg", "minecraft:ghast"),
    ("minecraft:guardian_spawn_egg", "minecraft:guardian"),
    ("minecraft:horse_spawn_egg", "minecraft:horse"),
    ("minecraft:husk_spawn_egg", "minecraft:husk"),
    ("minecraft:llama_spawn_egg", "minecraft:llama"),
    ("minecraft:magma_cube_spawn_egg", "minecraft:magma_cube"),
    ("minecraft:mooshroom_spawn_egg", "minecraft:mooshroom"),
    ("minecraft:mule_spawn_egg", "minecraft:mule"),
    ("minecraft:ocelot_spawn_egg", "minecraft:ocelot"),
    ("minecraft:panda_spawn_egg", "minecraft:panda"),
    ("minecraft:parrot_spawn_egg", "minecraft:parrot"),
    ("minecraft:phantom_spawn_egg", "minecraft:phantom"),
    ("minecraft:pig_spawn_egg", "minecraft:pig"),
    ("minecraft:pillager_spawn_egg", "minecraft:pillager"),
    ("minecraft:polar_bear_spawn_egg", "minecraft:polar_bear"),
    ("minecraft:pufferfish_spawn_egg", "minecraft:pufferfish"),
    ("minecraft:rabbit_spawn_egg", "minecraft:rabbit"),
    ("minecraft:ravager_spawn_egg", "minecraft:ravager"),
    ("minecraft:salmon_spawn_egg", "minecraft:salmon"),
    ("minecraft:sheep_spawn_egg", "minecraft:sheep"),
    ("minecraft:shulker_spawn_egg", "minecraft:shulker"),
    ("minecraft:silverfish_spawn_egg", "minecraft:silverfish"),
    ("minecraft:skeleton_horse_spawn_egg", "minecraft:skeleton_horse"),
    ("minecraft:skeleton_spawn_egg", "minecraft:skeleton"),
    ("minecraft:slime_spawn_egg", "minecraft:slime"),
    ("minecraft:spider_spawn_egg", "minecraft:spider"),
    ("minecraft:squid_spawn_egg", "minecraft:squid"),
    ("minecraft:stray_spawn_egg", "minecraft:stray"),
    ("minecraft:trader_llama_spawn_egg", "minecraft:trader_llama"),
    ("minecraft:tropical_fish_spawn_egg", "minecraft:tropical_fish"),
    ("minecraft:turtle_spawn_egg", "minecraft:turtle"),
    ("minecraft:vex_spawn_egg", "minecraft:vex"),
    ("minecraft:villager_spawn_egg", "minecraft:villager"),
    ("minecraft:vindicator_spawn_egg", "minecraft:vindicator"),
    ("minecraft:wandering_trader_spawn_egg", "minecraft:wandering_trader"),
    ("minecraft:witch_spawn_egg", "minecraft:witch"),
    ("minecraft:wither_skeleton_spawn_egg", "minecraft:wither_skeleton"),
    ("minecraft:wolf_spawn_egg", "minecraft:wolf"),
    ("minecraft:zombie_horse_spawn_egg", "minecraft:zombie_horse"),
    ("minecraft:hoglin_spawn_egg", "minecraft:hoglin"),
    ("minecraft:piglin_spawn_egg", "minecraft:piglin"),
    ("minecraft:strider_spawn_egg", "minecraft:strider"),
    ("minecraft:zoglin_spawn_egg", "minecraft:zoglin"),
    ("minecraft:zombie_spawn_egg", "minecraft:zombie"),
    ("minecraft:zombified_piglin_spawn_egg", "minecraft:zombified_piglin"),
    ("minecraft:zombie_villager_spawn_egg", "minecraft:zombie_villager"),
];

static SHARED: LazyLock<SpawnEggTable> = LazyLock::new(SpawnEggTable::new);

/// Bidirectional spawn egg ↔ entity type table.
///
/// Lookups accept identifiers with or without the `minecraft:` namespace, in
/// any case. Blank input never matches.
#[derive(Debug, Clone)]
pub struct SpawnEggTable {
    by_item: HashMap<&'static str, &'static str>,
    by_entity: HashMap<&'static str, &'static str>,
}

impl Default for SpawnEggTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SpawnEggTable {
    pub fn new() -> Self {
        let by_item: HashMap<_, _> = SPAWN_EGGS.iter().copied().collect();
        let by_entity: HashMap<_, _> = SPAWN_EGGS.iter().map(|&(item, entity)| (entity, item)).collect();
        debug_assert_eq!(by_item.len(), SPAWN_EGGS.len());
        debug_assert_eq!(by_entity.len(), SPAWN_EGGS.len());
        Self { by_item, by_entity }
    }

    /// Process-wide table, built on first use.
    pub fn shared() -> &'static SpawnEggTable {
        &SHARED
    }

    pub fn is_spawn_egg(&self, item: &str) -> bool {
        self.entity_for(item).is_some()
    }

    /// Entity type spawned by a spawn egg item.
    pub fn entity_for(&self, item: &str) -> Option<&'static str> {
        let key = canonical_id(item)?;
        self.by_item.get(key.as_str()).copied()
    }

    /// Spawn egg item for an entity type.
    pub fn spawn_egg_for(&self, entity: &str) -> Option<&'static str> {
        let key = canonical_id(entity)?;
        self.by_entity.get(key.as_str()).copied()
    }

    /// All (spawn egg, entity type) pairs, in a fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        SPAWN_EGGS.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.by_item.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_item.is_empty()
    }
}

fn canonical_id(id: &str) -> Option<String> {
    let id = id.trim();
    if id.is_empty() {
        return None;
    }
    let lower = id.to_lowercase();
    Some(if lower.contains(':') {
        lower
    } else {
        format!("minecraft:{lower}")
    })
}
