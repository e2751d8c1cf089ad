//src/config.rs
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_FILE_NAME: &str = "config.toml";
const APP_CONFIG_DIR: &str = "gymlog";
const CONFIG_ENV_VAR: &str = "GYMLOG_CONFIG_DIR"; // Environment variable name

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine configuration directory.")]
    CannotDetermineConfigDir,
    #[error("I/O error accessing config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file (TOML): {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Failed to serialize config data (TOML): {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric, // kg
    Imperial, // lbs
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)] // Ensure defaults are used if fields are missing
pub struct Config {
    /// Display hint for weight values; the core stores kilograms either way.
    pub units: Units,
    /// Gate for the best-effort calendar sync around workout saves.
    pub calendar_sync_enabled: bool,
    /// Gate for the "rest finished" notification when a rest timer starts.
    pub rest_notifications_enabled: bool,
    /// Rest applied to planned exercises that do not specify one.
    pub default_rest_secs: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            units: Units::default(),
            calendar_sync_enabled: true,
            rest_notifications_enabled: true,
            default_rest_secs: crate::models::DEFAULT_REST_SECS,
        }
    }
}

/// Determines the path to the configuration file.
/// Honors the `GYMLOG_CONFIG_DIR` environment variable override.
/// # Errors
/// Returns `ConfigError` if the directory cannot be determined or created.
pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir_path = match std::env::var(CONFIG_ENV_VAR).ok() {
        Some(path_str) => PathBuf::from(path_str),
        None => dirs::config_dir()
            .ok_or(ConfigError::CannotDetermineConfigDir)?
            .join(APP_CONFIG_DIR),
    };

    if !config_dir_path.exists() {
        fs::create_dir_all(&config_dir_path)?;
    }

    Ok(config_dir_path.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from the TOML file at the given path, writing a
/// default file when none exists.
/// # Errors
/// Returns `ConfigError` on I/O or parse failure.
pub fn load(config_path: &Path) -> Result<Config, ConfigError> {
    if config_path.exists() {
        let content = fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::TomlParse)?;
        Ok(config)
    } else {
        let default_config = Config::default();
        save(config_path, &default_config)?;
        Ok(default_config)
    }
}

/// Saves the configuration to the TOML file.
/// # Errors
/// Returns `ConfigError` on I/O or serialization failure.
pub fn save(config_path: &Path, config: &Config) -> Result<(), ConfigError> {
    if let Some(parent_dir) = config_path.parent() {
        if !parent_dir.exists() {
            fs::create_dir_all(parent_dir)?;
        }
    }
    let content = toml::to_string_pretty(config).map_err(ConfigError::TomlSerialize)?;
    fs::write(config_path, content)?;
    Ok(())
}
