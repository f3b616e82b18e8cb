//! Application configuration structures.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Largest page the volumes endpoint will serve.
pub const MAX_PAGE_SIZE: u32 = 40;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Search endpoint and HTTP client settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Local persistence settings
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.api.base_url)
            .map_err(|e| AppError::validation(format!("api.base_url is invalid: {e}")))?;
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.page_size == 0 || self.api.page_size > MAX_PAGE_SIZE {
            return Err(AppError::validation(format!(
                "api.page_size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        if self.api.print_type.trim().is_empty() {
            return Err(AppError::validation("api.print_type is empty"));
        }
        if self.api.projection.trim().is_empty() {
            return Err(AppError::validation("api.projection is empty"));
        }
        if self.api.timeout_secs == Some(0) {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        let key = &self.storage.favorites_key;
        if key.trim().is_empty() {
            return Err(AppError::validation("storage.favorites_key is empty"));
        }
        if key.contains(['/', '\\']) || key.contains("..") {
            return Err(AppError::validation(
                "storage.favorites_key must not contain path separators",
            ));
        }
        Ok(())
    }

    /// Validate a configuration loaded from `path`, naming the file on failure.
    pub fn ensure_valid(&self, path: impl AsRef<Path>) -> Result<()> {
        self.validate()
            .map_err(|e| AppError::config(format!("{} is invalid: {e}", path.as_ref().display())))
    }
}

/// Search endpoint and HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Volumes search endpoint
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Results requested per page
    #[serde(default = "defaults::page_size")]
    pub page_size: u32,

    /// `printType` filter sent with every search
    #[serde(default = "defaults::print_type")]
    pub print_type: String,

    /// `projection` sent with every search
    #[serde(default = "defaults::projection")]
    pub projection: String,

    /// Optional API key, sent as `key`
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds; unset leaves the transport default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    /// Request timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            page_size: defaults::page_size(),
            print_type: defaults::print_type(),
            projection: defaults::projection(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

/// Local persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key under which the favorite ids are stored
    #[serde(default = "defaults::favorites_key")]
    pub favorites_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            favorites_key: defaults::favorites_key(),
        }
    }
}

mod defaults {
    pub fn base_url() -> String {
        "https://www.googleapis.com/books/v1/volumes".into()
    }
    pub fn user_agent() -> String {
        concat!("bookfinder/", env!("CARGO_PKG_VERSION")).into()
    }
    pub fn page_size() -> u32 {
        20
    }
    pub fn print_type() -> String {
        "books".into()
    }
    pub fn projection() -> String {
        "full".into()
    }
    pub fn favorites_key() -> String {
        "bookFinder-favorites".into()
    }
}
