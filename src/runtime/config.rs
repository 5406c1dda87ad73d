// Configuration module for the Pokédex client

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::core::constants::{
    DEFAULT_BASE_URL, DEFAULT_PAGE_LIMIT, DEFAULT_PAGE_OFFSET, DEFAULT_REQUEST_TIMEOUT,
};

// =============================================================================
// CONFIGURATION STRUCTURES
// =============================================================================

/// Catalog API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the catalog API, without the resource path
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Number of summaries shown by the list screen
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,

    /// Offset of the page shown by the list screen
    #[serde(default = "default_page_offset")]
    pub page_offset: u32,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_page_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}
fn default_page_offset() -> u32 {
    DEFAULT_PAGE_OFFSET
}
fn default_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT.as_secs()
}
fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_limit: default_page_limit(),
            page_offset: default_page_offset(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LoggingSettings {
    /// Mirror logs to stdout
    #[serde(default)]
    pub console: bool,
    /// Log file path (relative to the config file or absolute). Empty = no file logging.
    #[serde(default)]
    pub log_file: String,
}

impl LoggingSettings {
    /// Resolve `log_file` against the directory holding the config file
    pub fn log_file_path(&self, config_dir: Option<&Path>) -> Option<PathBuf> {
        if self.log_file.is_empty() {
            return None;
        }
        let path = PathBuf::from(&self.log_file);
        match config_dir {
            Some(dir) if path.is_relative() => Some(dir.join(path)),
            _ => Some(path),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub api: ApiSettings,
}

// =============================================================================
// CONFIG LOADING
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    pub const CONFIG_FILENAME: &'static str = "pokedex.toml";

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "[config] Looking for config");

        if !path.exists() {
            debug!("[config] No config found, using defaults");
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), "[config] Loaded config");
        Ok(config)
    }
}
