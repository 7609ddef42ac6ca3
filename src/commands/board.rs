//! Board command (`ticketgrid board`)
//!
//! Loads the ticket snapshot, applies the persisted display settings (updated
//! by any `--group-by`/`--order-by` flags) and prints the grouped columns.

use std::path::PathBuf;

use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, resolve_source};
use crate::cli::OutputOptions;
use crate::config::Config;
use crate::display::render_board;
use crate::error::Result;
use crate::grid::{build_user_index, load_grid};
use crate::prefs::{FilePreferenceStore, load_display_settings, save_grouping, save_ordering};
use crate::remote::load_board;
use crate::types::{GroupingMode, OrderingMode};

/// Options for the board command
#[derive(Debug, Default)]
pub struct BoardOptions {
    pub group_by: Option<GroupingMode>,
    pub order_by: Option<OrderingMode>,
    pub url: Option<String>,
    pub file: Option<PathBuf>,
}

/// Render the ticket board
pub async fn cmd_board(options: BoardOptions, output: OutputOptions) -> Result<()> {
    let config = Config::load()?;

    let mut prefs = FilePreferenceStore::open_default()?;
    if let Some(grouping) = options.group_by {
        save_grouping(&mut prefs, grouping)?;
    }
    if let Some(ordering) = options.order_by {
        save_ordering(&mut prefs, ordering)?;
    }
    let settings = load_display_settings(&prefs);

    let source = resolve_source(&config, options.url, options.file);
    let snapshot = load_board(&source, config.fetch_timeout()).await?;

    let users = build_user_index(&snapshot.users);
    for user_id in users.dangling_references(&snapshot.tickets) {
        tracing::warn!("Ticket references unknown user '{}'", user_id);
    }

    let grid = load_grid(&snapshot.tickets, settings);

    let ordering = settings
        .ordering
        .map(|o| o.to_string())
        .unwrap_or_else(|| "none".to_string());

    let json_output = json!({
        "grouping": settings.grouping.to_string(),
        "ordering": ordering,
        "grid": grid,
        "users": snapshot.users,
    });

    let mut text_output = render_board(&grid, settings.grouping, &users);
    text_output.push_str(&format!(
        "\n{}",
        format!(
            "{} tickets in {} columns · grouped by {} · ordered by {}",
            grid.ticket_count(),
            grid.len(),
            settings.grouping,
            ordering
        )
        .dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}
