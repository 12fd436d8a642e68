//! Read-only, Bukkit-style view over a TOML or JSON configuration document.
//!
//! A [`ConfigTree`] owns the parsed document; [`ConfigSection`] borrows one
//! table of it and remembers its dotted path for diagnostics.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::item_map::ItemStack;

/// A parsed configuration document whose root is a table.
#[derive(Debug, Clone, Default)]
pub struct ConfigTree {
    root: Map<String, Value>,
}

impl ConfigTree {
    /// Wrap an in-memory document. The root must be an object.
    pub fn from_value(root: Value) -> Result<Self, ConfigError> {
        match root {
            Value::Object(root) => Ok(Self { root }),
            other => Err(ConfigError::RootNotTable {
                got: value_kind(&other),
            }),
        }
    }

    /// Parse a TOML document.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let root: Value = toml::from_str(toml_str)?;
        Self::from_value(root)
    }

    /// Parse a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let root: Value = serde_json::from_str(json)?;
        Self::from_value(root)
    }

    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Load a document, picking the format from the file extension (`.json`
    /// is JSON, anything else TOML).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            Self::load_json(path)
        } else {
            Self::load_toml(path)
        }
    }

    /// The root section.
    pub fn root(&self) -> ConfigSection<'_> {
        ConfigSection {
            entries: &self.root,
            path: String::new(),
        }
    }
}

/// A borrowed table inside a [`ConfigTree`].
#[derive(Debug, Clone)]
pub struct ConfigSection<'a> {
    entries: &'a Map<String, Value>,
    path: String,
}

impl<'a> ConfigSection<'a> {
    /// Dotted path from the document root, empty for the root itself.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Direct child keys, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.entries.keys().map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_section(&self, key: &str) -> bool {
        matches!(self.entries.get(key), Some(Value::Object(_)))
    }

    /// The child table at `key`, if it is one.
    pub fn section(&self, key: &str) -> Option<ConfigSection<'a>> {
        match self.entries.get(key) {
            Some(Value::Object(entries)) => Some(ConfigSection {
                entries,
                path: self.child_path(key),
            }),
            _ => None,
        }
    }

    /// Follow a dotted path (`"zones.spawn"`) through nested tables.
    pub fn find_section(&self, path: &str) -> Option<ConfigSection<'a>> {
        path.split('.')
            .try_fold(self.clone(), |section, key| section.section(key))
    }

    pub fn is_string(&self, key: &str) -> bool {
        matches!(self.entries.get(key), Some(Value::String(_)))
    }

    pub fn get_string(&self, key: &str) -> Option<&'a str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Integer value at `key`, or `default` if missing, not a number or out of range.
    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        self.number(key)
            .and_then(|n| i32::try_from(n).ok())
            .unwrap_or(default)
    }

    /// Like [`get_int`](Self::get_int) but 64-bit.
    pub fn get_long(&self, key: &str, default: i64) -> i64 {
        self.number(key).unwrap_or(default)
    }

    /// The item stack described by the child table at `key`.
    pub fn get_item_stack(&self, key: &str) -> Option<ItemStack> {
        self.section(key)
            .and_then(|section| ItemStack::from_section(&section))
    }

    /// Path of a direct child, used in diagnostics.
    pub fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        }
    }

    fn number(&self, key: &str) -> Option<i64> {
        match self.entries.get(key)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            _ => None,
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "table",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
        name = "outpost"
        radius = 12
        height = 3.9
        huge = 9999999999

        [zones.spawn]
        type = "GLOBAL"

        [zones.spawn.center]
        x = 10
    "#;

    #[test]
    fn read_values() {
        let tree = ConfigTree::from_toml_str(DOC).unwrap();
        let root = tree.root();
        assert_eq!(root.path(), "");
        assert_eq!(root.get_string("name"), Some("outpost"));
        assert!(root.is_string("name"));
        assert!(!root.is_string("radius"));
        assert_eq!(root.get_int("radius", 0), 12);
        assert_eq!(root.get_int("height", 0), 3);
        assert_eq!(root.get_int("missing", 7), 7);
        assert_eq!(root.get_int("name", 7), 7);
        assert_eq!(root.get_int("huge", -1), -1);
        assert_eq!(root.get_long("huge", -1), 9_999_999_999);
        assert_eq!(
            root.keys().collect::<Vec<_>>(),
            vec!["height", "huge", "name", "radius", "zones"]
        );
    }

    #[test]
    fn nested_sections_track_path() {
        let tree = ConfigTree::from_toml_str(DOC).unwrap();
        let root = tree.root();
        assert!(root.is_section("zones"));
        assert!(!root.is_section("name"));
        let spawn = root.find_section("zones.spawn").unwrap();
        assert_eq!(spawn.path(), "zones.spawn");
        assert_eq!(spawn.get_string("type"), Some("GLOBAL"));
        let center = spawn.section("center").unwrap();
        assert_eq!(center.path(), "zones.spawn.center");
        assert_eq!(center.get_int("x", 0), 10);
        assert!(root.find_section("zones.nether").is_none());
        assert!(root.find_section("name.inner").is_none());
    }

    #[test]
    fn json_documents() {
        let tree = ConfigTree::from_json_str(r#"{"a": {"b": "c"}}"#).unwrap();
        assert_eq!(
            tree.root().section("a").unwrap().get_string("b"),
            Some("c")
        );
    }

    #[test]
    fn root_must_be_table() {
        let err = ConfigTree::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, ConfigError::RootNotTable { got: "array" }));
        assert!(ConfigTree::from_toml_str("not = = toml").is_err());
    }

    #[test]
    fn load_by_extension() {
        let dir = std::env::temp_dir().join("mc_rs_config_test_load");
        let _ = std::fs::create_dir_all(&dir);
        let toml_path = dir.join("plugin.toml");
        let json_path = dir.join("plugin.json");
        std::fs::write(&toml_path, "answer = 42").unwrap();
        std::fs::write(&json_path, r#"{"answer": 43}"#).unwrap();

        assert_eq!(ConfigTree::load(&toml_path).unwrap().root().get_int("answer", 0), 42);
        assert_eq!(ConfigTree::load(&json_path).unwrap().root().get_int("answer", 0), 43);
        assert!(matches!(
            ConfigTree::load(dir.join("absent.toml")),
            Err(ConfigError::Io(_))
        ));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
