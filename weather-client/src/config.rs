use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::model::Units;

/// Environment variable naming an alternative settings file.
pub const CONFIG_PATH_ENV: &str = "WEATHER_CHECK_CONFIG";

/// Environment variable carrying the API key; takes precedence over the file.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

const DEFAULT_CONFIG_FILE: &str = "config/check.toml";

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_timeout_ms() -> u64 {
    5_000
}

fn default_city() -> String {
    "London".to_string()
}

fn default_country() -> String {
    "UK".to_string()
}

fn default_invalid_city() -> String {
    "NonExistentCity123".to_string()
}

/// Settings for a check run, stored on disk as TOML.
///
/// Every field except `api_key` has a usable default, so a missing or partial
/// file still yields a runnable configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default)]
    pub units: Units,

    /// City used by checks that need a location known to the upstream API.
    #[serde(default = "default_city")]
    pub default_city: String,

    #[serde(default = "default_country")]
    pub default_country: String,

    /// Deliberately unknown city for negative checks.
    #[serde(default = "default_invalid_city")]
    pub invalid_city: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_ms: default_timeout_ms(),
            units: Units::default(),
            default_city: default_city(),
            default_country: default_country(),
            invalid_city: default_invalid_city(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist.
    ///
    /// The file path comes from `WEATHER_CHECK_CONFIG` (default
    /// `config/check.toml`); `OPENWEATHER_API_KEY` overrides the file's key.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path();
        let env_key = env::var(API_KEY_ENV).ok();

        Self::load_from(&path, env_key.as_deref())
    }

    /// Load settings from an explicit path with an explicit key override.
    ///
    /// A missing file yields defaults; a non-empty `api_key_override` wins
    /// over whatever the file says. [`Self::load`] feeds this from the
    /// environment.
    pub fn load_from(path: &Path, api_key_override: Option<&str>) -> Result<Self> {
        let mut settings = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse settings file: {}", path.display()))?
        } else {
            Self::default()
        };

        if let Some(key) = api_key_override {
            if !key.is_empty() {
                settings.api_key = key.to_string();
            }
        }

        Ok(settings)
    }

    /// Path to the settings file.
    pub fn config_file_path() -> PathBuf {
        env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// The immutable client view of these settings.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            timeout_ms: self.timeout_ms,
            units: self.units,
        }
    }
}

/// Resolved configuration a [`crate::WeatherClient`] is built from.
/// Immutable once constructed.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_ms: u64,
    pub units: Units,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_ms: default_timeout_ms(),
            units: Units::default(),
        }
    }
}
