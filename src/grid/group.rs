//! Partitioning of ordered tickets into board columns.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::types::{GroupingMode, PriorityLabel, Ticket, TicketStatus};

/// What a column partitions on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Status(TicketStatus),
    Priority(PriorityLabel),
    /// The column key is the user id.
    User,
}

/// One board column: a group key and its tickets in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub key: String,
    pub kind: GroupKind,
    pub tickets: Vec<Ticket>,
}

/// Grouped-and-ordered tickets, keyed by group identifier in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridData {
    groups: Vec<Group>,
    positions: HashMap<String, usize>,
}

impl GridData {
    /// Create a grid with the given keys present as empty groups.
    fn seeded<'a>(columns: impl IntoIterator<Item = (&'a str, GroupKind)>) -> Self {
        let mut grid = GridData::default();
        for (key, kind) in columns {
            grid.group_mut(key, kind);
        }
        grid
    }

    fn group_mut(&mut self, key: &str, kind: GroupKind) -> &mut Group {
        let position = match self.positions.get(key) {
            Some(&position) => position,
            None => {
                self.groups.push(Group {
                    key: key.to_string(),
                    kind,
                    tickets: Vec::new(),
                });
                self.positions.insert(key.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        &mut self.groups[position]
    }

    fn push(&mut self, key: &str, kind: GroupKind, ticket: Ticket) {
        self.group_mut(key, kind).tickets.push(ticket);
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&[Ticket]> {
        self.positions
            .get(key)
            .map(|&position| self.groups[position].tickets.as_slice())
    }

    /// Number of groups (columns)
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of tickets across all groups
    pub fn ticket_count(&self) -> usize {
        self.groups.iter().map(|g| g.tickets.len()).sum()
    }
}

impl Serialize for GridData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.key, &group.tickets)?;
        }
        map.end()
    }
}

/// Partition tickets by status. All five statuses are always present.
pub fn group_by_status(tickets: Vec<Ticket>) -> GridData {
    let mut grid = GridData::seeded(
        TicketStatus::ALL
            .iter()
            .map(|&s| (s.as_str(), GroupKind::Status(s))),
    );
    for ticket in tickets {
        let status = ticket.status;
        grid.push(status.as_str(), GroupKind::Status(status), ticket);
    }
    grid
}

/// Partition tickets by priority label. The five canonical labels are always
/// present; an "NA" group follows them only when a ticket needs it.
pub fn group_by_priority(tickets: Vec<Ticket>) -> GridData {
    let mut grid = GridData::seeded(
        PriorityLabel::CANONICAL
            .iter()
            .map(|&p| (p.as_str(), GroupKind::Priority(p))),
    );
    for ticket in tickets {
        let label = ticket.priority_label();
        grid.push(label.as_str(), GroupKind::Priority(label), ticket);
    }
    grid
}

/// Partition tickets by assigned user id, in first-seen order.
pub fn group_by_user(tickets: Vec<Ticket>) -> GridData {
    let mut grid = GridData::default();
    for ticket in tickets {
        let key = ticket.user_id.clone();
        grid.push(&key, GroupKind::User, ticket);
    }
    grid
}

/// Partition already-ordered tickets. Relative order within each group is preserved.
pub fn group_tickets(tickets: Vec<Ticket>, grouping: GroupingMode) -> GridData {
    match grouping {
        GroupingMode::Status => group_by_status(tickets),
        GroupingMode::Priority => group_by_priority(tickets),
        GroupingMode::User => group_by_user(tickets),
    }
}
