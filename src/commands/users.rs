use std::path::PathBuf;

use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{CommandOutput, resolve_source};
use crate::cli::OutputOptions;
use crate::config::Config;
use crate::error::Result;
use crate::grid::{build_user_index, load_grid};
use crate::remote::load_board;
use crate::types::{DisplaySettings, GroupingMode};

/// A row in the users table
#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Available")]
    available: String,
    #[tabled(rename = "Tickets")]
    tickets: usize,
}

/// List users with their ticket counts
pub async fn cmd_users(
    url: Option<String>,
    file: Option<PathBuf>,
    output: OutputOptions,
) -> Result<()> {
    let config = Config::load()?;
    let source = resolve_source(&config, url, file);
    let snapshot = load_board(&source, config.fetch_timeout()).await?;

    let index = build_user_index(&snapshot.users);
    let by_user = load_grid(
        &snapshot.tickets,
        DisplaySettings {
            grouping: GroupingMode::User,
            ordering: None,
        },
    );
    let ticket_count = |id: &str| by_user.get(id).map_or(0, |tickets| tickets.len());

    let mut users: Vec<_> = index.iter().collect();
    users.sort_by(|a, b| a.id.cmp(&b.id));

    let json_users: Vec<_> = users
        .iter()
        .map(|u| {
            json!({
                "id": u.id,
                "name": u.name,
                "available": u.available,
                "tickets": ticket_count(u.id.as_str()),
            })
        })
        .collect();
    let dangling = index.dangling_references(&snapshot.tickets);

    let json_output = json!({
        "users": json_users,
        "unknown_user_ids": dangling,
    });

    let rows: Vec<UserRow> = users
        .iter()
        .map(|u| UserRow {
            id: u.id.clone(),
            name: u.name.clone(),
            available: if u.available { "yes" } else { "no" }.to_string(),
            tickets: ticket_count(u.id.as_str()),
        })
        .collect();

    let mut text_output = if rows.is_empty() {
        "No users found.".to_string()
    } else {
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        table.to_string()
    };
    if !dangling.is_empty() {
        text_output.push_str(&format!(
            "\n\nTickets reference unknown users: {}",
            dangling.join(", ")
        ));
    }

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}
