// src/config/mod.rs
//
// Application settings
//
// PRINCIPLES:
// - Settings live in a JSON file under the platform config directory
// - A missing file means defaults; first save creates it
// - Workflow state itself is never persisted

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Language preselected when a session starts
    pub default_language: String,

    /// Domain preselected when a session starts
    pub default_domain: String,

    pub provider: ProviderSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Translation endpoint base URL
    pub endpoint: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_language: "hi".to_string(),
            default_domain: "academic".to_string(),
            provider: ProviderSettings::default(),
        }
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://translate.googleapis.com/translate_a/single".to_string(),
            timeout_seconds: 30,
        }
    }
}

/// Get the settings file path
///
/// Settings are stored in the platform config directory.
/// Path structure: {CONFIG_DIR}/bhashasetu/config.json
pub fn get_config_path() -> AppResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| AppError::Config("Could not determine config directory".to_string()))?;

    let app_dir = config_dir.join("bhashasetu");

    // Ensure directory exists
    std::fs::create_dir_all(&app_dir)?;

    Ok(app_dir.join("config.json"))
}

impl AppConfig {
    /// Load settings, falling back to defaults when the file is absent.
    pub fn load() -> AppResult<Self> {
        let path = get_config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }

    pub fn save(&self) -> AppResult<()> {
        let path = get_config_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_catalog() {
        let config = AppConfig::default();
        assert!(crate::domain::find_language(&config.default_language).is_some());
        assert!(crate::domain::find_domain(&config.default_domain).is_some());
        assert_eq!(config.provider.timeout_seconds, 30);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = AppConfig::default();
        config.default_language = "ta".to_string();
        config.provider.timeout_seconds = 10;

        config.save_to(&path).unwrap();
        let loaded = AppConfig::load_from(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }
}
