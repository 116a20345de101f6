//! Configuration system
//!
//! Settings live in a two-level table of sections and keys holding string
//! values. Reads go through [`ConfigReader`], which never fails: a missing or
//! unparseable value is logged and replaced by a negative sentinel so the
//! caller carries on with degraded data. Files are TOML or RON maps of maps,
//! chosen by extension.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Sentinel returned when the section does not exist
pub const MISSING_SECTION: i32 = -1;

/// Sentinel returned when the key does not exist in its section
pub const MISSING_KEY: i32 = -2;

/// Sentinel returned when the value cannot be converted
pub const UNPARSEABLE: i32 = -3;

/// Why a lookup failed
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// Section not present
    #[error("missing section")]
    MissingSection,

    /// Key not present in the section
    #[error("missing key")]
    MissingKey,

    /// Value present but not convertible to the requested type
    #[error("unparseable value")]
    Unparseable,
}

impl LookupError {
    /// The numeric sentinel substituted for this failure
    pub fn sentinel(self) -> i32 {
        match self {
            Self::MissingSection => MISSING_SECTION,
            Self::MissingKey => MISSING_KEY,
            Self::Unparseable => UNPARSEABLE,
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Neither the user file nor the default file could be loaded
    #[error("could not load user config ({user}) or default config ({default})")]
    Fallback {
        /// Failure loading the user file
        user: Box<ConfigError>,
        /// Failure loading the default file
        default: Box<ConfigError>,
    },
}

/// Typed read access to sectioned settings
///
/// Only [`lookup`](ConfigReader::lookup) is required; the typed readers
/// substitute sentinels and log a warning on failure.
pub trait ConfigReader {
    /// Raw string value for `(section, key)`
    fn lookup(&self, section: &str, key: &str) -> Result<&str, LookupError>;

    /// Integer value; accepts integral text and truncates decimal text
    fn try_read_int(&self, section: &str, key: &str) -> Result<i32, LookupError> {
        let raw = self.lookup(section, key)?.trim();
        if let Ok(value) = raw.parse::<i32>() {
            return Ok(value);
        }
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value as i32),
            _ => Err(LookupError::Unparseable),
        }
    }

    /// Float value; infinities, NaN and values outside `f32` range are unparseable
    fn try_read_float(&self, section: &str, key: &str) -> Result<f32, LookupError> {
        match self.lookup(section, key)?.trim().parse::<f32>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(LookupError::Unparseable),
        }
    }

    /// Integer value, or the failure sentinel
    fn read_int(&self, section: &str, key: &str) -> i32 {
        self.try_read_int(section, key).unwrap_or_else(|err| {
            log::warn!("Config [{}] {}: {}", section, key, err);
            err.sentinel()
        })
    }

    /// Float value, or the failure sentinel
    fn read_float(&self, section: &str, key: &str) -> f32 {
        self.try_read_float(section, key).unwrap_or_else(|err| {
            log::warn!("Config [{}] {}: {}", section, key, err);
            err.sentinel() as f32
        })
    }

    /// String value, or an empty string
    fn read_string(&self, section: &str, key: &str) -> String {
        match self.lookup(section, key) {
            Ok(value) => value.to_string(),
            Err(err) => {
                log::warn!("Config [{}] {}: {}", section, key, err);
                String::new()
            }
        }
    }
}

/// A value as it appears in a config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum FileValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
}

impl FileValue {
    fn into_text(self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Boolean(value) => String::from(if value { "1" } else { "0" }),
            Self::Text(value) => value,
        }
    }

    fn from_text(text: &str) -> Self {
        if let Ok(value) = text.parse::<i64>() {
            return Self::Integer(value);
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Float(value),
            _ => Self::Text(text.to_string()),
        }
    }
}

type FileTable = BTreeMap<String, BTreeMap<String, FileValue>>;

/// In-memory settings table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    sections: BTreeMap<String, BTreeMap<String, String>>,
    source: Option<PathBuf>,
}

impl ConfigStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn from_table(table: FileTable) -> Self {
        let sections = table
            .into_iter()
            .map(|(section, keys)| {
                let keys = keys
                    .into_iter()
                    .map(|(key, value)| (key, value.into_text()))
                    .collect();
                (section, keys)
            })
            .collect();
        Self {
            sections,
            source: None,
        }
    }

    fn to_table(&self) -> FileTable {
        self.sections
            .iter()
            .map(|(section, keys)| {
                let keys = keys
                    .iter()
                    .map(|(key, value)| (key.clone(), FileValue::from_text(value)))
                    .collect();
                (section.clone(), keys)
            })
            .collect()
    }

    /// Parse TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let table: FileTable =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(Self::from_table(table))
    }

    /// Parse RON text
    pub fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        let table: FileTable =
            ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(Self::from_table(table))
    }

    /// Load configuration from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let mut store = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&contents)?,
            Some("ron") => Self::from_ron_str(&contents)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };
        store.source = Some(path.to_path_buf());
        log::info!("Loaded config from {}", path.display());
        Ok(store)
    }

    /// Load the user file, falling back to the default file
    pub fn load_with_fallback(
        user: impl AsRef<Path>,
        default: impl AsRef<Path>,
    ) -> Result<Self, ConfigError> {
        let user = user.as_ref();
        match Self::load_from_file(user) {
            Ok(store) => Ok(store),
            Err(user_err) => {
                log::warn!(
                    "User config {} unavailable ({}), using defaults",
                    user.display(),
                    user_err
                );
                Self::load_from_file(default).map_err(|default_err| ConfigError::Fallback {
                    user: Box::new(user_err),
                    default: Box::new(default_err),
                })
            }
        }
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let table = self.to_table();
        let contents = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::to_string_pretty(&table)
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Some("ron") => ron::ser::to_string_pretty(&table, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    /// Set a value in memory; nothing is written to disk
    pub fn write_config(&mut self, section: &str, key: &str, value: impl ToString) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    /// File the store was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Section names in sorted order
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Key/value pairs of one section in sorted order
    pub fn entries(&self, section: &str) -> impl Iterator<Item = (&str, &str)> {
        self.sections
            .get(section)
            .into_iter()
            .flat_map(|keys| keys.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

impl ConfigReader for ConfigStore {
    fn lookup(&self, section: &str, key: &str) -> Result<&str, LookupError> {
        self.sections
            .get(section)
            .ok_or(LookupError::MissingSection)?
            .get(key)
            .map(String::as_str)
            .ok_or(LookupError::MissingKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLE: &str = r#"
[Player]
speed = 5
shapeRadius = 32.5
name = "ship"
spawnInvincible = true

[Enemy]
speedMin = "fast"
"#;

    #[test]
    fn test_typed_reads() {
        let config = ConfigStore::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.read_int("Player", "speed"), 5);
        assert_relative_eq!(config.read_float("Player", "shapeRadius"), 32.5);
        assert_eq!(config.read_int("Player", "shapeRadius"), 32);
        assert_eq!(config.read_string("Player", "name"), "ship");
        assert_eq!(config.read_int("Player", "spawnInvincible"), 1);
    }

    #[test]
    fn test_failure_sentinels() {
        let config = ConfigStore::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.read_int("Boss", "speed"), MISSING_SECTION);
        assert_eq!(config.read_int("Player", "lives"), MISSING_KEY);
        assert_eq!(config.read_int("Enemy", "speedMin"), UNPARSEABLE);
        assert_relative_eq!(config.read_float("Enemy", "speedMin"), -3.0);
        assert_eq!(config.read_string("Boss", "name"), "");
        assert_eq!(config.try_read_int("Player", "lives"), Err(LookupError::MissingKey));
    }

    #[test]
    fn test_non_finite_floats_are_unparseable() {
        let mut config = ConfigStore::new();
        for text in ["inf", "-inf", "NaN", "1e39"] {
            config.write_config("Enemy", "speedMax", text);
            assert_eq!(config.try_read_float("Enemy", "speedMax"), Err(LookupError::Unparseable), "{text}");
            assert_relative_eq!(config.read_float("Enemy", "speedMax"), UNPARSEABLE as f32);
        }
    }

    #[test]
    fn test_write_is_in_memory() {
        let mut config = ConfigStore::new();
        config.write_config("Global", "maxPower", 4);
        assert_eq!(config.read_int("Global", "maxPower"), 4);
        assert!(config.source().is_none());
    }

    #[test]
    fn test_ron_parsing() {
        let config = ConfigStore::from_ron_str(r#"{ "Window": { "width": 1280, "scale": 0.5 } }"#).unwrap();
        assert_eq!(config.read_int("Window", "width"), 1280);
        assert_relative_eq!(config.read_float("Window", "scale"), 0.5);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut config = ConfigStore::from_toml_str(SAMPLE).unwrap();
        config.write_config("Player", "speed", 7);
        config.save_to_file(&path).unwrap();

        let reloaded = ConfigStore::load_from_file(&path).unwrap();
        assert_eq!(reloaded.read_int("Player", "speed"), 7);
        assert_relative_eq!(reloaded.read_float("Player", "shapeRadius"), 32.5);
        assert_eq!(reloaded.read_string("Player", "name"), "ship");
        assert_eq!(reloaded.source(), Some(path.as_path()));
    }

    #[test]
    fn test_fallback_to_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let default = dir.path().join("default.toml");
        std::fs::write(&default, SAMPLE).unwrap();

        let config = ConfigStore::load_with_fallback(dir.path().join("missing.toml"), &default).unwrap();
        assert_eq!(config.read_int("Player", "speed"), 5);
    }

    #[test]
    fn test_fallback_reports_both_failures() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigStore::load_with_fallback(dir.path().join("a.toml"), dir.path().join("b.ini"));
        assert!(matches!(result, Err(ConfigError::Fallback { .. })));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ini");
        std::fs::write(&path, "x").unwrap();
        assert!(matches!(ConfigStore::load_from_file(&path), Err(ConfigError::UnsupportedFormat(_))));
    }
}
