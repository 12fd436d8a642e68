use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct CheckSettings {
    #[serde(default)]
    pub logging: LoggingSection,
    #[serde(default)]
    pub worlds: WorldsSection,
    pub check: CheckSection,
}

#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WorldsSection {
    /// Worlds that areas may refer to.
    #[serde(default = "default_world_names")]
    pub names: Vec<String>,
}

fn default_world_names() -> Vec<String> {
    vec!["world".into(), "world_nether".into(), "world_the_end".into()]
}

impl Default for WorldsSection {
    fn default() -> Self {
        Self {
            names: default_world_names(),
        }
    }
}

/// What to check. Every list holds dotted section paths inside `file`.
#[derive(Debug, Deserialize)]
pub struct CheckSection {
    /// Plugin config file to check (TOML, or JSON by extension).
    pub file: String,
    #[serde(default)]
    pub areas: Vec<String>,
    #[serde(default)]
    pub potion_effects: Vec<String>,
    #[serde(default)]
    pub item_maps: Vec<String>,
    /// Tables of `name = "<duration>"` entries.
    #[serde(default)]
    pub durations: Vec<String>,
    /// Tables of `<enchantment slug> = "<text>"` entries.
    #[serde(default)]
    pub enchantments: Vec<String>,
    /// Tables of `<spawn egg item> = "<text>"` entries.
    #[serde(default)]
    pub spawn_eggs: Vec<String>,
    /// Durations longer than this are reported. Default: 365 days.
    #[serde(
        default = "default_long_duration",
        deserialize_with = "mc_rs_config::duration::deserialize_millis"
    )]
    pub long_duration: i64,
}

fn default_long_duration() -> i64 {
    mc_rs_config::DurationUnit::Years.millis()
}

impl CheckSettings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&contents)?;
        Ok(settings)
    }
}
