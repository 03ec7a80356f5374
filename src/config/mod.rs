//! Configuration management for the mulgyeol dashboard
//!
//! This module handles loading and validating configuration from environment
//! variables and an optional TOML file. Credentials are not configuration;
//! they are resolved separately in [`crate::credentials`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Naver Open API endpoints and request policy
    pub api: ApiConfig,

    /// Secrets file location
    pub secrets: SecretsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// API-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// DataLab search-trend endpoint
    pub trend_url: String,

    /// News-search endpoint
    pub news_url: String,

    /// Request timeout in seconds; requests must fail fast, never hang
    pub timeout_secs: u64,

    /// Maximum news snippets requested per keyword
    pub news_display: u32,
}

/// Secrets file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretsConfig {
    /// Path to the TOML secrets file holding the `[naver]` credential pair
    pub path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("MULGYEOL_TREND_URL") {
            config.api.trend_url = url;
        }
        if let Ok(url) = std::env::var("MULGYEOL_NEWS_URL") {
            config.api.news_url = url;
        }
        if let Some(timeout) = std::env::var("MULGYEOL_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.api.timeout_secs = timeout;
        }
        if let Some(display) = std::env::var("MULGYEOL_NEWS_DISPLAY")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
        {
            config.api.news_display = display;
        }
        if let Ok(path) = std::env::var("MULGYEOL_SECRETS_PATH") {
            config.secrets.path = path.into();
        }
        if let Ok(level) = std::env::var("MULGYEOL_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Ok(format) = std::env::var("MULGYEOL_LOG_FORMAT") {
            config.logging.format = format;
        }

        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.api.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than 0");
        }

        if self.api.news_display == 0 {
            anyhow::bail!("news_display must be greater than 0");
        }

        if self.api.trend_url.is_empty() || self.api.news_url.is_empty() {
            anyhow::bail!("API endpoint URLs must not be empty");
        }

        Ok(())
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            secrets: SecretsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            trend_url: String::from("https://openapi.naver.com/v1/datalab/search"),
            news_url: String::from("https://openapi.naver.com/v1/search/news.json"),
            timeout_secs: 20,
            news_display: 5,
        }
    }
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("secrets.toml"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}
