use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::types::{GroupingMode, OrderingMode};

#[derive(Parser)]
#[command(name = "ticketgrid")]
#[command(about = "Grouped, ordered ticket board for the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format shared by every command
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub json: bool,
}

impl OutputOptions {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

/// Where to read the ticket snapshot from
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Fetch from this URL instead of the configured source
    #[arg(long, conflicts_with = "file")]
    pub url: Option<String>,

    /// Read the snapshot from a local JSON file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show tickets grouped into columns
    #[command(visible_alias = "b")]
    Board {
        /// Group by: status, priority, user (saved as the new preference)
        #[arg(short, long, value_parser = parse_grouping)]
        group_by: Option<GroupingMode>,

        /// Order by: priority, title (saved as the new preference)
        #[arg(short, long, value_parser = parse_ordering)]
        order_by: Option<OrderingMode>,

        #[command(flatten)]
        source: SourceArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List users and their ticket counts
    Users {
        #[command(flatten)]
        source: SourceArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage display preferences
    Display {
        #[command(subcommand)]
        action: DisplayAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum DisplayAction {
    /// Show the saved grouping and ordering
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Save a grouping or ordering
    Set {
        /// Preference key (grouping, ordering)
        key: String,
        /// New value
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (source.url, source.timeout)
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (source.url, source.timeout)
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_grouping(s: &str) -> Result<GroupingMode, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid grouping. Must be one of: {}",
            GroupingMode::ALL_STRINGS.join(", ")
        )
    })
}

fn parse_ordering(s: &str) -> Result<OrderingMode, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid ordering. Must be one of: {}",
            OrderingMode::ALL_STRINGS.join(", ")
        )
    })
}
