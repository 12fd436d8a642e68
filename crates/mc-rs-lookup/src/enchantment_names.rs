//! Display names for enchantments, e.g. `DIG_SPEED` → `"Efficiency"`.
//!
//! Names come from a CSV resource with rows `slug,display name[,...]`. The
//! slug is resolved to a canonical enchantment identifier through an
//! [`EnchantmentResolver`]; rows that cannot be used are skipped with a warning.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use tracing::{info, warn};

use crate::error::LookupError;

/// The enchantment names shipped with the crate.
const BUNDLED_CSV: &str = include_str!("../data/enchantments.csv");

/// Static information about an enchantment type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnchantmentInfo {
    /// Modern name, e.g. `"efficiency"`.
    pub name: &'static str,
    /// Legacy server-API slug, e.g. `"DIG_SPEED"`.
    pub legacy_slug: &'static str,
}

impl EnchantmentInfo {
    /// Namespaced identifier used as the table key, e.g. `"minecraft:efficiency"`.
    pub fn identifier(&self) -> String {
        format!("minecraft:{}", self.name)
    }
}

macro_rules! enchantments {
    ($(($name:expr, $slug:expr)),* $(,)?) => {
        &[$(EnchantmentInfo { name: $name, legacy_slug: $slug }),*]
    };
}

/// All known enchantments, in Bedrock ID order.
pub const ENCHANTMENT_LIST: &[EnchantmentInfo] = enchantments![
    ("protection", "PROTECTION_ENVIRONMENTAL"),
    ("fire_protection", "PROTECTION_FIRE"),
    ("feather_falling", "PROTECTION_FALL"),
    ("blast_protection", "PROTECTION_EXPLOSIONS"),
    ("projectile_protection", "PROTECTION_PROJECTILE"),
    ("thorns", "THORNS"),
    ("respiration", "OXYGEN"),
    ("depth_strider", "DEPTH_STRIDER"),
    ("aqua_affinity", "WATER_WORKER"),
    ("sharpness", "DAMAGE_ALL"),
    ("smite", "DAMAGE_UNDEAD"),
    ("bane_of_arthropods", "DAMAGE_ARTHROPODS"),
    ("knockback", "KNOCKBACK"),
    ("fire_aspect", "FIRE_ASPECT"),
    ("looting", "LOOT_BONUS_MOBS"),
    ("efficiency", "DIG_SPEED"),
    ("silk_touch", "SILK_TOUCH"),
    ("unbreaking", "DURABILITY"),
    ("fortune", "LOOT_BONUS_BLOCKS"),
    ("power", "ARROW_DAMAGE"),
    ("punch", "ARROW_KNOCKBACK"),
    ("flame", "ARROW_FIRE"),
    ("infinity", "ARROW_INFINITE"),
    ("luck_of_the_sea", "LUCK"),
    ("lure", "LURE"),
    ("frost_walker", "FROST_WALKER"),
    ("mending", "MENDING"),
    ("binding_curse", "BINDING_CURSE"),
    ("vanishing_curse", "VANISHING_CURSE"),
    ("impaling", "IMPALING"),
    ("riptide", "RIPTIDE"),
    ("loyalty", "LOYALTY"),
    ("channeling", "CHANNELING"),
    ("multishot", "MULTISHOT"),
    ("piercing", "PIERCING"),
    ("quick_charge", "QUICK_CHARGE"),
    ("soul_speed", "SOUL_SPEED"),
];

/// Look up an enchantment by legacy slug, modern name or namespaced
/// identifier, ignoring case.
pub fn enchantment_by_name(name: &str) -> Option<&'static EnchantmentInfo> {
    let lower = name.trim().to_lowercase();
    let lower = lower.strip_prefix("minecraft:").unwrap_or(&lower);
    ENCHANTMENT_LIST
        .iter()
        .find(|e| e.name == lower || e.legacy_slug.eq_ignore_ascii_case(lower))
}

/// Maps a CSV slug to the identifier names are stored under.
pub trait EnchantmentResolver {
    fn resolve(&self, slug: &str) -> Option<String>;
}

/// Resolves against [`ENCHANTMENT_LIST`].
#[derive(Debug, Clone, Copy, Default)]
pub struct VanillaEnchantments;

impl EnchantmentResolver for VanillaEnchantments {
    fn resolve(&self, slug: &str) -> Option<String> {
        enchantment_by_name(slug).map(EnchantmentInfo::identifier)
    }
}

/// Why a CSV row was not loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotEnoughData,
    UnknownEnchantment,
    MissingName,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            SkipReason::NotEnoughData => "This enchantment row does not have enough data",
            SkipReason::UnknownEnchantment => "Could not find an enchantment on this line",
            SkipReason::MissingName => "This enchantment has not been given a name",
        };
        f.write_str(msg)
    }
}

/// A row that was skipped during [`EnchantmentNames::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number.
    pub line_number: usize,
    pub line: String,
    pub reason: SkipReason,
}

/// Outcome of loading a CSV resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedRow>,
}

/// Enchantment identifier → display name.
///
/// Keys are whatever the resolver maps a slug to, so lookups go through the
/// same resolver and any spelling it accepts finds the entry.
#[derive(Debug, Clone, Default)]
pub struct EnchantmentNames<R = VanillaEnchantments> {
    resolver: R,
    names: BTreeMap<String, String>,
}

impl EnchantmentNames {
    /// An empty table resolving against vanilla enchantments.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table loaded from the bundled CSV.
    pub fn bundled() -> Self {
        let mut names = Self::new();
        names.load_bundled();
        names
    }

    /// Replace the table with the bundled CSV.
    pub fn load_bundled(&mut self) -> LoadReport {
        self.load(BUNDLED_CSV)
    }
}

impl<R: EnchantmentResolver> EnchantmentNames<R> {
    pub fn with_resolver(resolver: R) -> Self {
        Self {
            resolver,
            names: BTreeMap::new(),
        }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Clear all names, ready for a reload.
    pub fn reset(&mut self) {
        self.names.clear();
    }

    /// Replace the table with the rows of `csv`.
    pub fn load(&mut self, csv: &str) -> LoadReport {
        self.reset();
        let mut report = LoadReport::default();

        for (index, line) in csv.lines().enumerate() {
            match self.load_row(line) {
                Ok(()) => report.loaded += 1,
                Err(reason) => {
                    warn!("{reason}: {line}");
                    report.skipped.push(SkippedRow {
                        line_number: index + 1,
                        line: line.to_string(),
                        reason,
                    });
                }
            }
        }

        info!(
            "Loaded {} enchantment names ({} rows skipped)",
            report.loaded,
            report.skipped.len()
        );
        report
    }

    /// Replace the table with the rows of a CSV file.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadReport, LookupError> {
        let csv = std::fs::read_to_string(path)?;
        Ok(self.load(&csv))
    }

    /// Display name of an enchantment, or `None` if it has none.
    ///
    /// Any spelling the resolver accepts works (`DIG_SPEED`, `efficiency`,
    /// `minecraft:efficiency`). A blank identifier is a caller error.
    pub fn name(&self, enchantment: &str) -> Result<Option<&str>, LookupError> {
        if enchantment.trim().is_empty() {
            return Err(LookupError::MissingEnchantment);
        }
        Ok(self
            .resolver
            .resolve(enchantment)
            .and_then(|id| self.names.get(&id))
            .map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Entries in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Trailing empty columns are dropped before counting, so `MENDING,` has
    /// too few columns rather than an empty name.
    fn load_row(&mut self, line: &str) -> Result<(), SkipReason> {
        let mut columns: Vec<&str> = line.split(',').collect();
        while columns.last().is_some_and(|c| c.is_empty()) {
            columns.pop();
        }
        let [slug, name, ..] = columns[..] else {
            return Err(SkipReason::NotEnoughData);
        };
        let enchantment = self
            .resolver
            .resolve(slug.trim())
            .ok_or(SkipReason::UnknownEnchantment)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(SkipReason::MissingName);
        }
        self.names.insert(enchantment, name.to_string());
        Ok(())
    }
}
