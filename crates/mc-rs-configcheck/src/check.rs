//! Runs the config parsers over the sections named in the settings file.

use std::collections::BTreeMap;
use std::convert::Infallible;

use mc_rs_config::{
    parse_area, parse_duration, parse_item_map, parse_key_value_map, parse_potion_effects,
    ConfigSection, ConfigTree, Diagnostic, Severity, WorldResolver,
};
use mc_rs_lookup::{EnchantmentNames, EnchantmentResolver, SpawnEggTable};
use tracing::{debug, warn};

use crate::settings::CheckSection;

/// Counts of everything that parsed, plus all problems found.
#[derive(Debug, Default)]
pub struct CheckSummary {
    pub areas: usize,
    pub potion_effects: usize,
    pub items: u64,
    pub durations: usize,
    /// `path.key` of every duration above the configured limit.
    pub long_durations: Vec<String>,
    pub enchantments: usize,
    pub spawn_eggs: usize,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn run_checks(
    check: &CheckSection,
    tree: &ConfigTree,
    worlds: &impl WorldResolver,
    enchantment_names: &EnchantmentNames,
) -> CheckSummary {
    let root = tree.root();
    let mut summary = CheckSummary::default();

    for path in &check.areas {
        let Some(section) = find_listed(&root, path, &mut summary) else {
            continue;
        };
        let parsed = parse_area(Some(&section), worlds);
        if let Some(area) = &parsed.value {
            debug!("Area {path}: {:?} in {}", area.shape, area.world.name());
            summary.areas += 1;
        }
        summary.diagnostics.extend(parsed.diagnostics);
    }

    for path in &check.potion_effects {
        let Some(section) = find_listed(&root, path, &mut summary) else {
            continue;
        };
        let parsed = parse_potion_effects(Some(&section)).map(|effects| effects.len());
        summary.potion_effects += parsed.value;
        summary.diagnostics.extend(parsed.diagnostics);
    }

    for path in &check.item_maps {
        let Some(section) = find_listed(&root, path, &mut summary) else {
            continue;
        };
        let parsed = parse_item_map(Some(&section)).map(|items| items.total_item_amount());
        summary.items += parsed.value;
        summary.diagnostics.extend(parsed.diagnostics);
    }

    for path in &check.durations {
        let mut durations: BTreeMap<String, i64> = BTreeMap::new();
        key_values(&root, path, &mut summary, |parent, identifier| {
            parse_key_value_map(
                parent,
                identifier,
                |k| Ok::<_, Infallible>(k.to_string()),
                parse_duration,
                &mut durations,
            )
        });
        for (key, millis) in &durations {
            if *millis > check.long_duration {
                summary.long_durations.push(format!("{path}.{key}"));
            }
        }
        summary.durations += durations.len();
    }

    for path in &check.enchantments {
        let mut labels: BTreeMap<String, String> = BTreeMap::new();
        key_values(&root, path, &mut summary, |parent, identifier| {
            parse_key_value_map(
                parent,
                identifier,
                |k| {
                    enchantment_names
                        .resolver()
                        .resolve(k)
                        .ok_or("unknown enchantment")
                },
                str::to_string,
                &mut labels,
            )
        });
        for (enchantment, label) in &labels {
            if let Ok(Some(name)) = enchantment_names.name(enchantment) {
                debug!("{name}: {label}");
            }
        }
        summary.enchantments += labels.len();
    }

    for path in &check.spawn_eggs {
        let mut entries: BTreeMap<&'static str, String> = BTreeMap::new();
        key_values(&root, path, &mut summary, |parent, identifier| {
            parse_key_value_map(
                parent,
                identifier,
                |k| SpawnEggTable::shared().entity_for(k).ok_or("not a spawn egg"),
                str::to_string,
                &mut entries,
            )
        });
        summary.spawn_eggs += entries.len();
    }

    summary
}

/// Look up a listed section, recording a warning if it does not exist.
fn find_listed<'a>(
    root: &ConfigSection<'a>,
    path: &str,
    summary: &mut CheckSummary,
) -> Option<ConfigSection<'a>> {
    let section = root.find_section(path);
    if section.is_none() {
        missing_section(path, summary);
    }
    section
}

/// Split `a.b.c` into the section `a.b` and the identifier `c`, then run `parse`.
fn key_values<'a>(
    root: &ConfigSection<'a>,
    path: &str,
    summary: &mut CheckSummary,
    parse: impl FnOnce(&ConfigSection<'a>, &str) -> Vec<Diagnostic>,
) {
    let (parent, identifier) = match path.rsplit_once('.') {
        Some((parent_path, identifier)) => (root.find_section(parent_path), identifier),
        None => (Some(root.clone()), path),
    };
    match parent.filter(|p| p.is_section(identifier)) {
        Some(parent) => summary.diagnostics.extend(parse(&parent, identifier)),
        None => missing_section(path, summary),
    }
}

fn missing_section(path: &str, summary: &mut CheckSummary) {
    let diagnostic = Diagnostic {
        severity: Severity::Warning,
        path: path.to_string(),
        message: "Configured section not found".to_string(),
    };
    warn!("{diagnostic}");
    summary.diagnostics.push(diagnostic);
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_rs_config::KnownWorlds;

    const PLUGIN: &str = r#"
        [zones.spawn]
        type = "ELLIPSE"
        world = "world"
        xSize = 30
        zSize = 30
        [zones.spawn.center]
        x = 0
        z = 0

        [zones.broken]
        type = "RECTANGLE"
        world = "world"

        [brew.effects.first]
        type = "SPEED"
        [brew.effects.second]
        duration = 20

        [costs.a]
        type = "IRON_INGOT"
        amount = 10
        [costs.b]
        type = "iron_ingot"
        amount = 6

        [cooldowns]
        pearl = "15s"
        ban = "perma"

        [labels]
        DIG_SPEED = "Fast digging"
        NOPE = "unknown"

        [drops]
        COW_SPAWN_EGG = "cow drop"
        "minecraft:stone" = "not an egg"
    "#;

    fn settings(toml_str: &str) -> CheckSection {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn runs_every_parser() {
        let tree = ConfigTree::from_toml_str(PLUGIN).unwrap();
        let check = settings(
            r#"
            file = "plugin.toml"
            areas = ["zones.spawn", "zones.broken", "zones.nether"]
            potion_effects = ["brew.effects"]
            item_maps = ["costs"]
            durations = ["cooldowns"]
            enchantments = ["labels"]
            spawn_eggs = ["drops"]
            "#,
        );
        let worlds = KnownWorlds::new(["world"]);
        let summary = run_checks(&check, &tree, &worlds, &EnchantmentNames::bundled());

        assert_eq!(summary.areas, 1);
        assert_eq!(summary.potion_effects, 1);
        assert_eq!(summary.items, 16);
        assert_eq!(summary.durations, 2);
        assert_eq!(summary.long_durations, vec!["cooldowns.ban".to_string()]);
        assert_eq!(summary.enchantments, 1);
        assert_eq!(summary.spawn_eggs, 1);

        let messages: Vec<String> = summary.diagnostics.iter().map(ToString::to_string).collect();
        assert!(messages.contains(&"Found no center for area at zones.broken".to_string()));
        assert!(messages.contains(&"Configured section not found at zones.nether".to_string()));
        assert!(messages
            .iter()
            .any(|m| m.starts_with("Failed to parse labels NOPE")));
        assert!(messages
            .iter()
            .any(|m| m.starts_with("Failed to parse drops minecraft:stone")));
    }

    #[test]
    fn missing_key_value_table_reported() {
        let tree = ConfigTree::from_toml_str(PLUGIN).unwrap();
        let check = settings(
            r#"
            file = "plugin.toml"
            durations = ["zones.spawn.timers", "absent"]
            "#,
        );
        let summary = run_checks(
            &check,
            &tree,
            &KnownWorlds::default(),
            &EnchantmentNames::new(),
        );
        assert_eq!(summary.durations, 0);
        assert_eq!(summary.diagnostics.len(), 2);
    }

    #[test]
    fn missing_area_reported_once() {
        let tree = ConfigTree::from_toml_str(PLUGIN).unwrap();
        let check = settings(
            r#"
            file = "plugin.toml"
            areas = ["zones.nether"]
            "#,
        );
        let summary = run_checks(
            &check,
            &tree,
            &KnownWorlds::new(["world"]),
            &EnchantmentNames::new(),
        );
        assert_eq!(summary.areas, 0);
        let messages: Vec<String> = summary.diagnostics.iter().map(ToString::to_string).collect();
        assert_eq!(messages, vec!["Configured section not found at zones.nether".to_string()]);
    }
}
