use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::Deref;

/// Ticket workflow status, in board column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    Backlog,
    Todo,
    #[serde(rename = "In progress")]
    InProgress,
    Done,
    Canceled,
}

impl TicketStatus {
    /// The five statuses in canonical column order.
    pub const ALL: [TicketStatus; 5] = [
        TicketStatus::Backlog,
        TicketStatus::Todo,
        TicketStatus::InProgress,
        TicketStatus::Done,
        TicketStatus::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Backlog => "Backlog",
            TicketStatus::Todo => "Todo",
            TicketStatus::InProgress => "In progress",
            TicketStatus::Done => "Done",
            TicketStatus::Canceled => "Canceled",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Human-readable label for a numeric ticket priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityLabel {
    NoPriority,
    Low,
    Medium,
    High,
    Urgent,
    /// Any value outside 0-4
    NotAvailable,
}

impl PriorityLabel {
    /// The five labels that are always present when grouping by priority.
    pub const CANONICAL: [PriorityLabel; 5] = [
        PriorityLabel::NoPriority,
        PriorityLabel::Low,
        PriorityLabel::Medium,
        PriorityLabel::High,
        PriorityLabel::Urgent,
    ];

    pub fn from_priority(priority: i64) -> Self {
        match priority {
            0 => PriorityLabel::NoPriority,
            1 => PriorityLabel::Low,
            2 => PriorityLabel::Medium,
            3 => PriorityLabel::High,
            4 => PriorityLabel::Urgent,
            _ => PriorityLabel::NotAvailable,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLabel::NoPriority => "No priority",
            PriorityLabel::Low => "Low",
            PriorityLabel::Medium => "Medium",
            PriorityLabel::High => "High",
            PriorityLabel::Urgent => "Urgent",
            PriorityLabel::NotAvailable => "NA",
        }
    }
}

impl fmt::Display for PriorityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ticket identifier. The ticket source may send ids as strings or integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    pub fn new(id: impl Into<String>) -> Self {
        TicketId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for TicketId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for TicketId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        string_or_number(deserializer).map(TicketId)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

/// Accept either a JSON string or an integer and normalise it to a string.
pub fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub status: TicketStatus,
    /// Raw priority, 0 (no priority) through 4 (urgent). Out-of-range values are kept.
    pub priority: i64,
    #[serde(deserialize_with = "string_or_number")]
    pub user_id: String,
    #[serde(default)]
    pub tag: Vec<String>,
}

impl Ticket {
    pub fn priority_label(&self) -> PriorityLabel {
        PriorityLabel::from_priority(self.priority)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub available: bool,
}

/// The `{ tickets, users }` pair returned by the ticket source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub tickets: Vec<Ticket>,
    pub users: Vec<User>,
}

/// Dimension used to partition tickets into columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupingMode {
    #[default]
    Status,
    Priority,
    User,
}

impl GroupingMode {
    pub const ALL_STRINGS: &[&str] = &["status", "priority", "user"];

    /// Parse a stored or externally supplied mode. Only the exact lowercase
    /// names match; anything else degrades to `Status`.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "status" => GroupingMode::Status,
            "priority" => GroupingMode::Priority,
            "user" => GroupingMode::User,
            _ => {
                tracing::warn!("unknown grouping '{}', falling back to status", s);
                GroupingMode::Status
            }
        }
    }
}

enum_display_fromstr!(
    GroupingMode,
    crate::error::TicketGridError::InvalidGrouping,
    {
        Status => "status",
        Priority => "priority",
        User => "user",
    }
);

/// Dimension used to order tickets within a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderingMode {
    #[default]
    Priority,
    Title,
}

impl OrderingMode {
    pub const ALL_STRINGS: &[&str] = &["priority", "title"];

    /// Parse a stored or externally supplied mode. Only the exact lowercase
    /// names match; anything else yields `None`, which leaves tickets in their
    /// input order.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s {
            "priority" => Some(OrderingMode::Priority),
            "title" => Some(OrderingMode::Title),
            _ => {
                tracing::warn!("unknown ordering '{}', keeping input order", s);
                None
            }
        }
    }
}

enum_display_fromstr!(
    OrderingMode,
    crate::error::TicketGridError::InvalidOrdering,
    {
        Priority => "priority",
        Title => "title",
    }
);

/// Current display configuration handed to the grid assembler on every recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    pub grouping: GroupingMode,
    /// `None` keeps tickets in the order the source returned them.
    pub ordering: Option<OrderingMode>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            grouping: GroupingMode::Status,
            ordering: Some(OrderingMode::Priority),
        }
    }
}

impl DisplaySettings {
    pub fn new(grouping: GroupingMode, ordering: OrderingMode) -> Self {
        DisplaySettings {
            grouping,
            ordering: Some(ordering),
        }
    }

    /// Build settings from raw mode strings, applying the lenient fallbacks.
    pub fn from_raw(grouping: &str, ordering: &str) -> Self {
        DisplaySettings {
            grouping: GroupingMode::parse_lenient(grouping),
            ordering: OrderingMode::parse_lenient(ordering),
        }
    }
}
