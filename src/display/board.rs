//! Text rendering of a grouped board.
//!
//! Columns are stacked vertically: a header line with icon, title and ticket
//! count, followed by one card per ticket.

use owo_colors::OwoColorize;

use crate::display::icons::{priority_icon, status_icon, unknown_user_badge, user_badge};
use crate::grid::{GridData, Group, GroupKind, UserIndex};
use crate::types::{GroupingMode, Ticket};

/// Column title: the group key, or the user's name for a user column
pub fn column_title(group: &Group, users: &UserIndex) -> String {
    match group.kind {
        GroupKind::Status(_) | GroupKind::Priority(_) => group.key.clone(),
        GroupKind::User => users.display_name(&group.key),
    }
}

fn column_icon(group: &Group, users: &UserIndex) -> String {
    match group.kind {
        GroupKind::Status(status) => status_icon(status),
        GroupKind::Priority(label) => priority_icon(label),
        GroupKind::User => users
            .get(&group.key)
            .map(user_badge)
            .unwrap_or_else(unknown_user_badge),
    }
}

/// Header line for a column
pub fn format_column_header(group: &Group, users: &UserIndex) -> String {
    format!(
        "{} {} {}",
        column_icon(group, users),
        column_title(group, users).bold(),
        group.tickets.len().to_string().dimmed()
    )
}

/// A ticket card. The status glyph is hidden when the column already shows
/// the status, the user badge when the column already shows the user.
pub fn format_card(ticket: &Ticket, grouping: GroupingMode, users: &UserIndex) -> String {
    let mut card = format!("  {}", ticket.id.as_str().cyan());
    if grouping != GroupingMode::User {
        let badge = users
            .get(&ticket.user_id)
            .map(user_badge)
            .unwrap_or_else(unknown_user_badge);
        card.push_str(&format!(" {badge}"));
    }
    card.push('\n');

    if grouping == GroupingMode::Status {
        card.push_str(&format!("    {}\n", ticket.title));
    } else {
        card.push_str(&format!("    {} {}\n", status_icon(ticket.status), ticket.title));
    }

    if !ticket.tag.is_empty() {
        let tags: Vec<String> = ticket
            .tag
            .iter()
            .map(|tag| format!("· {tag}").dimmed().to_string())
            .collect();
        card.push_str(&format!("    {}\n", tags.join("  ")));
    }
    card
}

/// Render every column of `grid`, in order
pub fn render_board(grid: &GridData, grouping: GroupingMode, users: &UserIndex) -> String {
    let mut output = String::new();
    for (i, group) in grid.groups().iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format_column_header(group, users));
        output.push('\n');
        if group.tickets.is_empty() {
            output.push_str(&format!("  {}\n", "No tickets".dimmed()));
        }
        for ticket in &group.tickets {
            output.push_str(&format_card(ticket, grouping, users));
        }
    }
    output
}
