#[macro_use]
pub mod macros;

pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod grid;
pub mod paths;
pub mod prefs;
pub mod remote;
pub mod types;

pub use config::Config;
pub use error::{Result, TicketGridError};
pub use grid::{GridData, Group, UserIndex, build_user_index, load_grid, load_grid_raw};
pub use prefs::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, load_display_settings,
    save_grouping, save_ordering,
};
pub use remote::{BoardSource, fetch_board, load_board, load_board_file, parse_board_response};
pub use types::{
    BoardSnapshot, DisplaySettings, GroupingMode, OrderingMode, PriorityLabel, Ticket, TicketId,
    TicketStatus, User,
};
