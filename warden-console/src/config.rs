//! Console configuration
//!
//! Settings are layered: built-in defaults, then the JSON file in the user
//! config directory, then `WARDEN_*` environment variables (a `.env` file
//! is loaded first by the binary), then command-line flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;
use warden_core::SortConfig;

pub const ENV_SERVER_URL: &str = "WARDEN_SERVER_URL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "WARDEN_REQUEST_TIMEOUT_SECS";

const APP_DIR: &str = "warden";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid server URL {url:?}: {reason}")]
    InvalidServerUrl { url: String, reason: String },

    #[error("invalid request timeout {0:?}: expected a positive number of seconds")]
    InvalidTimeout(String),

    #[error("no user configuration directory available")]
    NoConfigDir,

    #[error("failed to read or write config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Persisted settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server_url: String,
    pub request_timeout_secs: u64,
    /// Initial ordering of the user table
    pub default_sort: SortConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:3000".to_string(),
            request_timeout_secs: 30,
            default_sort: SortConfig::default(),
        }
    }
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from the user config directory, falling back to defaults when
    /// the file is missing or unreadable.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring config at {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Overlay environment variables read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_SERVER_URL) {
            self.server_url = url;
        }
        if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            self.request_timeout_secs = parse_timeout(&raw)?;
        }
        Ok(())
    }

    pub fn apply_process_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env(|key| std::env::var(key).ok())
    }
}

pub fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

/// Validated runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server_url: Url,
    pub request_timeout: Duration,
    pub default_sort: SortConfig,
    /// Serve from the in-memory sample directory instead of the backend
    pub offline: bool,
}

impl AppConfig {
    pub fn from_config(config: &Config, offline: bool) -> Result<Self, ConfigError> {
        let server_url = Url::parse(&config.server_url).map_err(|err| {
            ConfigError::InvalidServerUrl {
                url: config.server_url.clone(),
                reason: err.to_string(),
            }
        })?;
        if !matches!(server_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidServerUrl {
                url: config.server_url.clone(),
                reason: format!("unsupported scheme {:?}", server_url.scheme()),
            });
        }
        if config.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout("0".to_string()));
        }

        Ok(Self {
            server_url,
            request_timeout: Duration::from_secs(config.request_timeout_secs),
            default_sort: config.default_sort,
            offline,
        })
    }

    pub fn server_url(&self) -> &str {
        self.server_url.as_str()
    }
}
