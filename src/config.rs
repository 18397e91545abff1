//! Portal connection configuration persisted as TOML.
//!
//! The only setting today is the backend base URL. A missing config file
//! falls back to the local development backend so a fresh checkout works
//! against a locally running portal.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::app_dirs::{self, AppDirError};

/// Filename used to store the app configuration inside the `.neuroscan` root.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Base URL used when no config file exists.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Settings that belong in the TOML config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Backend origin every endpoint path is joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl PortalConfig {
    /// Join an endpoint path (e.g. `/api/doctor-login`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Errors that can occur while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The application directory could not be resolved or created.
    #[error(transparent)]
    Dir(#[from] AppDirError),
    /// The config file exists but could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file is not valid TOML for this schema.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// The configured base URL is not a valid absolute URL.
    #[error("Invalid base_url {value:?}: {source}")]
    InvalidBaseUrl {
        value: String,
        source: url::ParseError,
    },
}

/// Load the configuration, falling back to defaults when no file exists.
pub fn load_or_default() -> Result<PortalConfig, ConfigError> {
    let path = app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(PortalConfig::default());
    }
    let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let config: PortalConfig =
        toml::from_str(&text).map_err(|source| ConfigError::Parse { path, source })?;
    validate_base_url(&config.base_url)?;
    Ok(config)
}

fn validate_base_url(value: &str) -> Result<(), ConfigError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|source| ConfigError::InvalidBaseUrl {
            value: value.to_string(),
            source,
        })
}
