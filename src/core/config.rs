//! Configuration management

use crate::core::{Error, Result, SystemParameters};
use crate::core::{DEFAULT_BACKUP_DAYS, DEFAULT_EFFICIENCY, DEFAULT_SUN_HOURS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "solar-sizer";

pub const REST_URL_ENV: &str = "SOLAR_SIZER_REST_URL";
pub const REST_KEY_ENV: &str = "SOLAR_SIZER_REST_KEY";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub sizing: SizingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        Ok(config_dir.join(APP_DIR).join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "en", "fr"
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String { "auto".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

/// Default system parameters offered when a calculator session opens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingConfig {
    #[serde(default = "default_sun_hours")]
    pub sun_hours: f64,
    #[serde(default = "default_backup_days")]
    pub backup_days: f64,
    #[serde(default = "default_efficiency")]
    pub efficiency: f64,
}

fn default_sun_hours() -> f64 { DEFAULT_SUN_HOURS }
fn default_backup_days() -> f64 { DEFAULT_BACKUP_DAYS }
fn default_efficiency() -> f64 { DEFAULT_EFFICIENCY }

impl SizingConfig {
    pub fn to_parameters(&self) -> SystemParameters {
        SystemParameters::new(self.sun_hours, self.backup_days, self.efficiency)
    }
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            sun_hours: default_sun_hours(),
            backup_days: default_backup_days(),
            efficiency: default_efficiency(),
        }
    }
}

/// Where calculation records are stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend: "sqlite" or "rest"
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Overrides the default SQLite file location
    #[serde(default)]
    pub database_path: Option<PathBuf>,
    #[serde(default)]
    pub rest: RestConfig,
}

fn default_backend() -> String { "sqlite".to_string() }

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            database_path: None,
            rest: RestConfig::default(),
        }
    }
}

/// Remote table endpoint (PostgREST-style)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_table() -> String { "stats".to_string() }
fn default_timeout_secs() -> u64 { 10 }

impl RestConfig {
    /// Base URL from config, falling back to the environment
    pub fn resolved_base_url(&self) -> Result<String> {
        self.base_url
            .clone()
            .or_else(|| std::env::var(REST_URL_ENV).ok())
            .ok_or_else(|| {
                Error::Config(format!(
                    "REST base URL not found in config or {} environment variable",
                    REST_URL_ENV
                ))
            })
    }

    /// API key from config, falling back to the environment
    pub fn resolved_api_key(&self) -> Result<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(REST_KEY_ENV).ok())
            .ok_or_else(|| {
                Error::Config(format!(
                    "REST API key not found in config or {} environment variable",
                    REST_KEY_ENV
                ))
            })
    }
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            table: default_table(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.general.language, "auto");
        assert_eq!(config.storage.backend, "sqlite");
        assert_eq!(config.sizing.to_parameters(), SystemParameters::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[sizing]\nsun_hours = 4.5\n\n[storage]\nbackend = \"rest\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.sizing.sun_hours, 4.5);
        assert_eq!(config.sizing.backup_days, 1.0);
        assert_eq!(config.sizing.efficiency, 0.85);
        assert_eq!(config.storage.backend, "rest");
        assert_eq!(config.storage.rest.table, "stats");
        assert_eq!(config.storage.rest.timeout_secs, 10);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.general.language = "fr".into();
        config.sizing.backup_days = 3.0;
        config.storage.rest.base_url = Some("https://example.test".into());
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.general.language, "fr");
        assert_eq!(reloaded.sizing.backup_days, 3.0);
        assert_eq!(
            reloaded.storage.rest.base_url.as_deref(),
            Some("https://example.test")
        );
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[sizing\nsun_hours = ").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_rest_values_from_config_win() {
        let rest = RestConfig {
            base_url: Some("https://db.example.test".into()),
            api_key: Some("anon".into()),
            ..Default::default()
        };
        assert_eq!(rest.resolved_base_url().unwrap(), "https://db.example.test");
        assert_eq!(rest.resolved_api_key().unwrap(), "anon");
    }
}
