//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where categories are fetched from
    #[serde(default)]
    pub source: SourceConfig,

    /// Home page selection rules
    #[serde(default)]
    pub home: HomeConfig,

    /// Console output settings
    #[serde(default)]
    pub logging: LoggingConfig,
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
        if self.source.user_agent.trim().is_empty() {
            return Err(AppError::validation("source.user_agent is empty"));
        }
        if self.source.timeout_secs == 0 {
            return Err(AppError::validation("source.timeout_secs must be > 0"));
        }
        if let Some(url) = &self.source.url {
            Url::parse(url)?;
        }
        if self.home.fallback_count == 0 {
            return Err(AppError::validation("home.fallback_count must be > 0"));
        }
        Ok(())
    }
}

/// Category API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Category endpoint; CLI flags take precedence
    #[serde(default)]
    pub url: Option<String>,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: None,
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Home page display-count policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeConfig {
    /// Up to this many root categories are all shown
    #[serde(default = "defaults::show_all_limit")]
    pub show_all_limit: usize,

    /// Shown when there are more roots and none is marked
    #[serde(default = "defaults::fallback_count")]
    pub fallback_count: usize,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            show_all_limit: defaults::show_all_limit(),
            fallback_count: defaults::fallback_count(),
        }
    }
}

/// Console output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level for report output (debug, info, warn, error)
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    // Source defaults
    pub fn user_agent() -> String {
        concat!("category-tree/", env!("CARGO_PKG_VERSION")).into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Home page defaults
    pub fn show_all_limit() -> usize {
        5
    }
    pub fn fallback_count() -> usize {
        3
    }

    pub fn log_level() -> String {
        "info".into()
    }
}
