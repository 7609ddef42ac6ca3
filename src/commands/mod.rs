mod board;
mod config;
mod display;
mod users;

pub use board::{BoardOptions, cmd_board};
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use display::{cmd_display_set, cmd_display_show};
pub use users::cmd_users;

use std::path::PathBuf;

use serde_json::Value;

use crate::cli::OutputOptions;
use crate::config::Config;
use crate::error::Result;
use crate::remote::BoardSource;

/// Output of a command in both JSON and human-readable form.
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print JSON when requested, otherwise the text form (falling back to JSON).
    pub fn print(self, output: OutputOptions) -> Result<()> {
        match self.text {
            Some(text) if !output.json => {
                println!("{text}");
                Ok(())
            }
            _ => print_json(&self.json),
        }
    }
}

pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Pick the snapshot source: `--file`, then `--url`, then configuration.
pub fn resolve_source(config: &Config, url: Option<String>, file: Option<PathBuf>) -> BoardSource {
    match (file, url) {
        (Some(path), _) => BoardSource::File(path),
        (None, Some(url)) => BoardSource::Url(url),
        (None, None) => BoardSource::Url(config.source_url()),
    }
}
