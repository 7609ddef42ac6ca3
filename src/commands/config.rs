//! Configuration commands for managing the ticket source.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print a single value
//! - `config set`: Set a configuration value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::cli::OutputOptions;
use crate::config::{Config, SOURCE_URL_ENV};
use crate::error::{Result, TicketGridError};

const VALID_KEYS: &str = "source.url, source.timeout";

/// Reject underscore keys with a dot-notation suggestion
fn validate_config_key(key: &str) -> Result<&str> {
    if let Some(pos) = key.find('_') {
        let dot_version = format!("{}.{}", &key[..pos], &key[pos + 1..]);
        return Err(TicketGridError::Config(format!(
            "invalid config key '{key}'. Use dot notation: '{dot_version}'"
        )));
    }
    Ok(key)
}

fn unknown_key(key: &str) -> TicketGridError {
    TicketGridError::Config(format!(
        "unknown config key '{key}'. Valid keys: {VALID_KEYS}"
    ))
}

/// Show current configuration
pub fn cmd_config_show(output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let url_overridden = std::env::var(SOURCE_URL_ENV).is_ok_and(|v| !v.is_empty());

    let json_output = json!({
        "source": {
            "url": config.source_url(),
            "url_from_env": url_overridden,
            "timeout": config.source.timeout,
        },
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));
    text_output.push_str(&format!("{}:\n", "source".cyan()));
    text_output.push_str(&format!("  url: {}", config.source_url()));
    if url_overridden {
        text_output.push_str(&format!(" {}", format!("(from {SOURCE_URL_ENV})").dimmed()));
    } else if config.source.url.is_none() {
        text_output.push_str(&format!(" {}", "(default)".dimmed()));
    }
    text_output.push('\n');
    text_output.push_str(&format!("  timeout: {}s\n", config.source.timeout));
    text_output.push('\n');
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", Config::config_path().display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output: OutputOptions) -> Result<()> {
    validate_config_key(key)?;

    let mut config = Config::load()?;

    let stored = match key {
        "source.url" => {
            config.set_source_url(value)?;
            config.source.url.clone().unwrap_or_default()
        }
        "source.timeout" => {
            let seconds = value.parse::<u64>().map_err(|_| {
                TicketGridError::Config(format!(
                    "invalid value '{value}' for source.timeout. Expected a number of seconds"
                ))
            })?;
            if seconds == 0 {
                return Err(TicketGridError::Config(
                    "source.timeout must be at least 1 second".to_string(),
                ));
            }
            config.set_fetch_timeout(seconds);
            seconds.to_string()
        }
        _ => return Err(unknown_key(key)),
    };
    config.save()?;

    let json_output = json!({
        "action": "config_set",
        "key": key,
        "value": stored,
        "success": true,
    });
    let text_output = format!("Set {} to {}", key.cyan(), stored);

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}

/// Get a specific configuration value
pub fn cmd_config_get(key: &str, output: OutputOptions) -> Result<()> {
    validate_config_key(key)?;

    let config = Config::load()?;

    let (json_output, text_output) = match key {
        "source.url" => {
            let url = config.source_url();
            (json!({ "key": key, "value": url }), url)
        }
        "source.timeout" => {
            let timeout = config.source.timeout;
            (json!({ "key": key, "value": timeout }), timeout.to_string())
        }
        _ => return Err(unknown_key(key)),
    };

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}
