//! Configuration management for gnome-scripts tools

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::paths::Paths;

/// Global gnome-scripts configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Path to the zenity binary (looked up on PATH when unset)
    #[serde(default)]
    pub zenity_path: Option<PathBuf>,

    /// General dialog options applied to every invocation
    #[serde(default)]
    pub general: GeneralDefaults,
}

/// Default values for the persistent dialog options
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GeneralDefaults {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub window_icon: Option<String>,

    #[serde(default)]
    pub width: Option<u32>,

    #[serde(default)]
    pub height: Option<u32>,

    /// Dialog timeout in seconds, enforced by zenity itself
    #[serde(default)]
    pub timeout: Option<u32>,
}

impl Config {
    /// Load config from the default location
    pub fn load_default() -> Result<Self> {
        Self::load(&Paths::new().config_file())
    }

    /// Load config from file
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            let config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config from {:?}", path))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let tmp = TempDir::new()?;
        let config = Config::load(&tmp.path().join("absent.json"))?;
        assert!(config.zenity_path.is_none());
        assert_eq!(config.general, GeneralDefaults::default());
        Ok(())
    }

    #[test]
    fn test_save_and_load() -> Result<()> {
        let tmp = TempDir::new()?;
        let path = tmp.path().join("nested").join("config.json");

        let config = Config {
            zenity_path: Some(PathBuf::from("/opt/zenity/bin/zenity")),
            general: GeneralDefaults {
                title: Some("Scripts".to_string()),
                width: Some(480),
                ..Default::default()
            },
        };
        config.save(&path)?;

        let loaded = Config::load(&path)?;
        assert_eq!(loaded.zenity_path, config.zenity_path);
        assert_eq!(loaded.general, config.general);
        Ok(())
    }

    #[test]
    fn test_partial_file() -> Result<()> {
        let tmp = TempDir::new()?;
        let path = tmp.path().join("config.json");
        std::fs::write(&path, r#"{"general": {"timeout": 30}}"#)?;

        let config = Config::load(&path)?;
        assert!(config.zenity_path.is_none());
        assert_eq!(config.general.timeout, Some(30));
        assert!(config.general.title.is_none());
        Ok(())
    }

    #[test]
    fn test_invalid_json_is_an_error() -> Result<()> {
        let tmp = TempDir::new()?;
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "{ not json")?;
        assert!(Config::load(&path).is_err());
        Ok(())
    }
}
