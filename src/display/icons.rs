//! Glyphs and colors for statuses, priorities and users.

use owo_colors::OwoColorize;

use crate::types::{PriorityLabel, TicketStatus, User};

/// Colored glyph for a ticket status
pub fn status_icon(status: TicketStatus) -> String {
    match status {
        TicketStatus::Backlog => "◌".truecolor(0xe2, 0xe2, 0xe2).to_string(),
        TicketStatus::Todo => "○".truecolor(0xe2, 0xe2, 0xe2).to_string(),
        TicketStatus::InProgress => "◐".truecolor(0xf1, 0xca, 0x4b).to_string(),
        TicketStatus::Done => "✔".truecolor(0x5e, 0x6a, 0xd2).to_string(),
        TicketStatus::Canceled => "✖".truecolor(0x94, 0xa2, 0xb3).to_string(),
    }
}

/// Colored glyph for a priority label. "NA" shares the urgent warning glyph.
pub fn priority_icon(label: PriorityLabel) -> String {
    match label {
        PriorityLabel::NoPriority => "···".truecolor(0x79, 0x7d, 0x84).to_string(),
        PriorityLabel::Low => "▂".truecolor(0x6b, 0x6f, 0x76).to_string(),
        PriorityLabel::Medium => "▂▄".truecolor(0x6b, 0x6f, 0x76).to_string(),
        PriorityLabel::High => "▂▄▆".truecolor(0x6b, 0x6f, 0x76).to_string(),
        PriorityLabel::Urgent | PriorityLabel::NotAvailable => {
            "!".truecolor(0xfc, 0x78, 0x40).bold().to_string()
        }
    }
}

/// First character of every word in `name`.
pub fn user_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Initials plus an availability dot
pub fn user_badge(user: &User) -> String {
    let dot = if user.available {
        "●".green().to_string()
    } else {
        "●".dimmed().to_string()
    };
    format!("[{}{}]", user_initials(&user.name), dot)
}

/// Badge for a user id that has no entry in the index
pub fn unknown_user_badge() -> String {
    format!("[{}]", "?".dimmed())
}
