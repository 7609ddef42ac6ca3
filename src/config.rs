//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` inside the configuration directory
//! (see [`crate::paths::config_dir`]) and includes:
//! - The URL of the ticket source
//! - The fetch timeout

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, TicketGridError};
use crate::paths;

/// Endpoint serving `{ tickets, users }` when nothing else is configured.
pub const DEFAULT_SOURCE_URL: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

/// Environment variable that overrides the configured source URL.
pub const SOURCE_URL_ENV: &str = "TICKETGRID_URL";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Ticket source settings
    #[serde(default, skip_serializing_if = "SourceConfig::is_default")]
    pub source: SourceConfig,
}

/// Ticket source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Source URL (default: [`DEFAULT_SOURCE_URL`])
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Fetch timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout: default_timeout(),
        }
    }
}

impl SourceConfig {
    /// Check if this config has default values
    pub fn is_default(&self) -> bool {
        self.url.is_none() && self.timeout == default_timeout()
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        paths::config_file()
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            TicketGridError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                TicketGridError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content).map_err(|e| {
            TicketGridError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;
        Ok(())
    }

    /// Get the source URL from the environment, the config file, or the default
    pub fn source_url(&self) -> String {
        if let Ok(url) = env::var(SOURCE_URL_ENV)
            && !url.is_empty()
        {
            return url;
        }

        self.source
            .url
            .clone()
            .unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string())
    }

    /// Set the source URL. Only http and https URLs are accepted.
    pub fn set_source_url(&mut self, value: &str) -> Result<()> {
        let parsed = Url::parse(value)
            .map_err(|e| TicketGridError::Config(format!("invalid source.url '{value}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(TicketGridError::Config(format!(
                "invalid source.url '{value}': scheme must be http or https"
            )));
        }
        self.source.url = Some(parsed.to_string());
        Ok(())
    }

    /// Get the fetch timeout duration
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout)
    }

    /// Set the fetch timeout in seconds
    pub fn set_fetch_timeout(&mut self, seconds: u64) {
        self.source.timeout = seconds;
    }
}
