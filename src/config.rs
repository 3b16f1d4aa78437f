//! Persisted application configuration.
//!
//! Settings live in a TOML file inside the `.spampal` directory. The only
//! setting today is the backend host; unknown keys in older files are
//! ignored so the format can grow.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings stored in the TOML config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the classification backend.
    #[serde(default = "default_backend_host")]
    pub backend_host: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_host: default_backend_host(),
        }
    }
}

fn default_backend_host() -> String {
    "http://127.0.0.1:4000".to_string()
}

/// Errors that can occur while loading or saving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config directory could not be resolved or created.
    #[error(transparent)]
    AppDir(#[from] app_dirs::AppDirError),
    /// Failed to read the config file.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },
    /// Config file contents are not valid TOML for this app.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
    /// Failed to write the config file.
    #[error("Failed to write config file {path}: {source}")]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },
    /// Failed to serialize the configuration to TOML.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Full path of the config file inside the app directory.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the persisted configuration, writing defaults on first run.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_file_path()?;
    if !path.exists() {
        let config = AppConfig::default();
        save(&config)?;
        return Ok(config);
    }
    let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })
}

/// Persist the configuration to the app directory.
pub fn save(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_file_path()?;
    let raw = toml::to_string_pretty(config)?;
    fs::write(&path, raw).map_err(|source| ConfigError::Write { path, source })
}
