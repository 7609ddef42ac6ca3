//! Display preference commands.
//!
//! - `display show`: Print the persisted grouping and ordering
//! - `display set`: Change one of them

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::cli::OutputOptions;
use crate::error::{Result, TicketGridError};
use crate::prefs::{
    FilePreferenceStore, GROUPING_KEY, ORDERING_KEY, load_display_settings, save_grouping,
    save_ordering,
};
use crate::types::{GroupingMode, OrderingMode};

/// Show the current display preferences
pub fn cmd_display_show(output: OutputOptions) -> Result<()> {
    let prefs = FilePreferenceStore::open_default()?;
    let settings = load_display_settings(&prefs);
    let ordering = settings
        .ordering
        .map(|o| o.to_string())
        .unwrap_or_else(|| "none".to_string());

    let json_output = json!({
        "grouping": settings.grouping.to_string(),
        "ordering": ordering,
        "preferences_file": prefs.path().to_string_lossy(),
    });

    let text_output = format!(
        "{}\n\n  {}: {}\n  {}: {}\n\n{}",
        "Display:".cyan().bold(),
        GROUPING_KEY.cyan(),
        settings.grouping,
        ORDERING_KEY.cyan(),
        ordering,
        format!("Preferences file: {}", prefs.path().display()).dimmed()
    );

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}

/// Set the grouping or ordering preference
pub fn cmd_display_set(key: &str, value: &str, output: OutputOptions) -> Result<()> {
    let mut prefs = FilePreferenceStore::open_default()?;

    let stored = match key {
        GROUPING_KEY => {
            let grouping: GroupingMode = value.parse()?;
            save_grouping(&mut prefs, grouping)?;
            grouping.to_string()
        }
        ORDERING_KEY => {
            let ordering: OrderingMode = value.parse()?;
            save_ordering(&mut prefs, ordering)?;
            ordering.to_string()
        }
        _ => {
            return Err(TicketGridError::Config(format!(
                "unknown display key '{key}'. Valid keys: {GROUPING_KEY}, {ORDERING_KEY}"
            )));
        }
    };

    let json_output = json!({
        "action": "display_set",
        "key": key,
        "value": stored,
        "success": true,
    });
    let text_output = format!("Set {} to {}", key.cyan(), stored);

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}
