use crate::error::{PalError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_CONTACTS_FILE: &str = "contacts.json";
pub const DEFAULT_NOTES_FILE: &str = "notes.json";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration for pal, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PalConfig {
    /// File name of the contacts store, relative to the data directory
    #[serde(default = "default_contacts_file")]
    pub contacts_file: String,

    /// File name of the notes store, relative to the data directory
    #[serde(default = "default_notes_file")]
    pub notes_file: String,

    /// Log filter used when `PAL_LOG` is not set (e.g. "warn", "pal=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_contacts_file() -> String {
    DEFAULT_CONTACTS_FILE.to_string()
}

fn default_notes_file() -> String {
    DEFAULT_NOTES_FILE.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for PalConfig {
    fn default() -> Self {
        Self {
            contacts_file: default_contacts_file(),
            notes_file: default_notes_file(),
            log_level: default_log_level(),
        }
    }
}

impl PalConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PalError::Io)?;
        let config: PalConfig = serde_json::from_str(&content).map_err(PalError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PalError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PalError::Serialization)?;
        fs::write(config_path, content).map_err(PalError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PalConfig::default();
        assert_eq!(config.contacts_file, "contacts.json");
        assert_eq!(config.notes_file, "notes.json");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = PalConfig::load(dir.path().join("nowhere")).unwrap();
        assert_eq!(config, PalConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let config = PalConfig {
            notes_file: "memo.json".to_string(),
            ..PalConfig::default()
        };
        config.save(dir.path()).unwrap();

        let loaded = PalConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.json"), r#"{"log_level": "debug"}"#).unwrap();

        let loaded = PalConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.log_level, "debug");
        assert_eq!(loaded.contacts_file, "contacts.json");
    }

    #[test]
    fn test_invalid_config_is_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.json"), "not json").unwrap();
        assert!(PalConfig::load(dir.path()).is_err());
    }
}
