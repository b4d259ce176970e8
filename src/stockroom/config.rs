use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for stockroom, stored as config.json in the data directory
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockroomConfig {
    /// Emit diagnostic trace events from the store and codec
    #[serde(default)]
    pub trace: bool,

    /// Override for the inventory data file location
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl StockroomConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: StockroomConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StockroomConfig::default();
        assert!(!config.trace);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = StockroomConfig::load(dir.path().join("nowhere")).unwrap();
        assert_eq!(config, StockroomConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();

        let config = StockroomConfig {
            trace: true,
            data_file: Some(PathBuf::from("/tmp/parts.csv")),
        };
        config.save(dir.path()).unwrap();

        let loaded = StockroomConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_creates_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        StockroomConfig::default().save(&nested).unwrap();
        assert!(nested.join(CONFIG_FILENAME).exists());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = StockroomConfig {
            trace: true,
            data_file: None,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: StockroomConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
