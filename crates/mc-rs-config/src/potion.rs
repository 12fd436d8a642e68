//! Potion effect lists.
//!
//! ```toml
//! [effects.speed]
//! type = "SPEED"
//! duration = 600      # ticks, or a duration string such as "30s"; default 200
//! amplifier = 1       # default 0
//! ```

use crate::diagnostic::{Diagnostics, Parsed};
use crate::duration::parse_duration_as_ticks;
use crate::section::ConfigSection;

/// Duration used when an entry does not specify one, in ticks.
pub const DEFAULT_EFFECT_DURATION_TICKS: i32 = 200;

/// Well-known Bedrock effect IDs.
pub mod effect_id {
    pub const SPEED: i32 = 1;
    pub const SLOWNESS: i32 = 2;
    pub const HASTE: i32 = 3;
    pub const MINING_FATIGUE: i32 = 4;
    pub const STRENGTH: i32 = 5;
    pub const INSTANT_HEALTH: i32 = 6;
    pub const INSTANT_DAMAGE: i32 = 7;
    pub const JUMP_BOOST: i32 = 8;
    pub const NAUSEA: i32 = 9;
    pub const REGENERATION: i32 = 10;
    pub const RESISTANCE: i32 = 11;
    pub const FIRE_RESISTANCE: i32 = 12;
    pub const WATER_BREATHING: i32 = 13;
    pub const INVISIBILITY: i32 = 14;
    pub const BLINDNESS: i32 = 15;
    pub const NIGHT_VISION: i32 = 16;
    pub const HUNGER: i32 = 17;
    pub const WEAKNESS: i32 = 18;
    pub const POISON: i32 = 19;
    pub const WITHER: i32 = 20;
    pub const HEALTH_BOOST: i32 = 21;
    pub const ABSORPTION: i32 = 22;
    pub const SATURATION: i32 = 23;
    pub const LEVITATION: i32 = 24;
    pub const FATAL_POISON: i32 = 25;
    pub const CONDUIT_POWER: i32 = 26;
    pub const SLOW_FALLING: i32 = 27;
    pub const BAD_OMEN: i32 = 28;
    pub const HERO_OF_THE_VILLAGE: i32 = 29;
    pub const DARKNESS: i32 = 30;
}

/// A status effect type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectType {
    pub id: i32,
    pub name: &'static str,
}

const EFFECT_TYPES: &[EffectType] = {
    use effect_id::*;
    &[
        EffectType { id: SPEED, name: "speed" },
        EffectType { id: SLOWNESS, name: "slowness" },
        EffectType { id: HASTE, name: "haste" },
        EffectType { id: MINING_FATIGUE, name: "mining_fatigue" },
        EffectType { id: STRENGTH, name: "strength" },
        EffectType { id: INSTANT_HEALTH, name: "instant_health" },
        EffectType { id: INSTANT_DAMAGE, name: "instant_damage" },
        EffectType { id: JUMP_BOOST, name: "jump_boost" },
        EffectType { id: NAUSEA, name: "nausea" },
        EffectType { id: REGENERATION, name: "regeneration" },
        EffectType { id: RESISTANCE, name: "resistance" },
        EffectType { id: FIRE_RESISTANCE, name: "fire_resistance" },
        EffectType { id: WATER_BREATHING, name: "water_breathing" },
        EffectType { id: INVISIBILITY, name: "invisibility" },
        EffectType { id: BLINDNESS, name: "blindness" },
        EffectType { id: NIGHT_VISION, name: "night_vision" },
        EffectType { id: HUNGER, name: "hunger" },
        EffectType { id: WEAKNESS, name: "weakness" },
        EffectType { id: POISON, name: "poison" },
        EffectType { id: WITHER, name: "wither" },
        EffectType { id: HEALTH_BOOST, name: "health_boost" },
        EffectType { id: ABSORPTION, name: "absorption" },
        EffectType { id: SATURATION, name: "saturation" },
        EffectType { id: LEVITATION, name: "levitation" },
        EffectType { id: FATAL_POISON, name: "fatal_poison" },
        EffectType { id: CONDUIT_POWER, name: "conduit_power" },
        EffectType { id: SLOW_FALLING, name: "slow_falling" },
        EffectType { id: BAD_OMEN, name: "bad_omen" },
        EffectType { id: HERO_OF_THE_VILLAGE, name: "village_hero" },
        EffectType { id: DARKNESS, name: "darkness" },
    ]
};

/// Older server-API names still found in configs.
const LEGACY_NAMES: &[(&str, &str)] = &[
    ("slow", "slowness"),
    ("fast_digging", "haste"),
    ("slow_digging", "mining_fatigue"),
    ("increase_damage", "strength"),
    ("heal", "instant_health"),
    ("harm", "instant_damage"),
    ("jump", "jump_boost"),
    ("confusion", "nausea"),
    ("damage_resistance", "resistance"),
    ("hero_of_the_village", "village_hero"),
];

impl EffectType {
    /// Look up an effect by name, ignoring case and an optional `minecraft:` prefix.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        let lower = lower.strip_prefix("minecraft:").unwrap_or(&lower);
        let canonical = LEGACY_NAMES
            .iter()
            .find(|(legacy, _)| *legacy == lower)
            .map_or(lower, |(_, modern)| *modern);
        EFFECT_TYPES.iter().find(|e| e.name == canonical).copied()
    }
}

/// One configured effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PotionEffectSpec {
    pub effect: EffectType,
    pub duration_ticks: i32,
    pub amplifier: i32,
}

/// Parse every child table of `section` as one effect. Entries without a
/// usable `type` are reported and skipped; the others are still returned.
pub fn parse_potion_effects(section: Option<&ConfigSection<'_>>) -> Parsed<Vec<PotionEffectSpec>> {
    let mut diags = Diagnostics::default();
    let mut effects = Vec::new();
    let Some(section) = section else {
        return diags.finish(effects);
    };

    for name in section.keys() {
        let Some(entry) = section.section(name) else {
            diags.severe(
                &section.child_path(name),
                "Expected potion effect to be a section",
            );
            continue;
        };
        let Some(type_name) = entry.get_string("type") else {
            diags.severe(
                entry.path(),
                "Expected potion type to be specified, but found no \"type\" option",
            );
            continue;
        };
        let Some(effect) = EffectType::from_name(type_name) else {
            diags.severe(
                entry.path(),
                format!("Expected potion type to be specified, but found {type_name} which is no valid type"),
            );
            continue;
        };

        let duration_ticks = match entry.get_string("duration") {
            Some(text) => i32::try_from(parse_duration_as_ticks(text)).unwrap_or(i32::MAX),
            None => entry.get_int("duration", DEFAULT_EFFECT_DURATION_TICKS),
        };
        let amplifier = entry.get_int("amplifier", 0);

        effects.push(PotionEffectSpec {
            effect,
            duration_ticks,
            amplifier,
        });
    }
    diags.finish(effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Severity;
    use crate::section::ConfigTree;

    fn parse(toml_str: &str) -> Parsed<Vec<PotionEffectSpec>> {
        let tree = ConfigTree::from_toml_str(toml_str).unwrap();
        let root = tree.root();
        let section = root.section("effects");
        parse_potion_effects(section.as_ref())
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(EffectType::from_name("SPEED").unwrap().id, effect_id::SPEED);
        assert_eq!(
            EffectType::from_name("minecraft:night_vision").unwrap().id,
            effect_id::NIGHT_VISION
        );
        assert_eq!(
            EffectType::from_name("INCREASE_DAMAGE").unwrap().name,
            "strength"
        );
        assert!(EffectType::from_name("flying").is_none());
    }

    #[test]
    fn missing_type_is_skipped() {
        let parsed = parse(
            r#"
            [effects.broken]
            duration = 100

            [effects.good]
            type = "REGENERATION"
            duration = 100
            amplifier = 2
            "#,
        );
        assert_eq!(parsed.value.len(), 1);
        assert_eq!(parsed.value[0].effect.id, effect_id::REGENERATION);
        assert_eq!(parsed.value[0].duration_ticks, 100);
        assert_eq!(parsed.value[0].amplifier, 2);
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].severity, Severity::Severe);
        assert_eq!(parsed.diagnostics[0].path, "effects.broken");
    }

    #[test]
    fn defaults_and_duration_strings() {
        let parsed = parse(
            r#"
            [effects.a]
            type = "speed"

            [effects.b]
            type = "SLOW"
            duration = "30s"
            "#,
        );
        assert!(parsed.is_clean());
        assert_eq!(parsed.value[0].duration_ticks, DEFAULT_EFFECT_DURATION_TICKS);
        assert_eq!(parsed.value[0].amplifier, 0);
        assert_eq!(parsed.value[1].effect.id, effect_id::SLOWNESS);
        assert_eq!(parsed.value[1].duration_ticks, 600);
    }

    #[test]
    fn invalid_entries_reported() {
        let parsed = parse(
            r#"
            [effects]
            stray = 5

            [effects.unknown]
            type = "FLYING"
            "#,
        );
        assert!(parsed.value.is_empty());
        assert_eq!(parsed.diagnostics.len(), 2);
        assert!(parsed.diagnostics[1].message.contains("FLYING"));
    }

    #[test]
    fn absent_section_is_empty() {
        let parsed = parse("x = 1");
        assert!(parsed.value.is_empty());
        assert!(parsed.is_clean());
    }
}
