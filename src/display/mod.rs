pub mod board;
pub mod icons;

pub use board::{column_title, format_card, format_column_header, render_board};
pub use icons::{priority_icon, status_icon, user_badge, user_initials};
