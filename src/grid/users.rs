//! Lookup table from user id to user record.

use std::collections::HashMap;

use crate::error::{Result, TicketGridError};
use crate::types::{Ticket, User};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserIndex {
    users: HashMap<String, User>,
}

/// Build a user index. Later entries win when ids repeat.
pub fn build_user_index(users: &[User]) -> UserIndex {
    let users = users
        .iter()
        .map(|user| (user.id.clone(), user.clone()))
        .collect();
    UserIndex { users }
}

impl UserIndex {
    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    /// Look up a user, reporting a dangling reference as an error.
    pub fn resolve(&self, id: &str) -> Result<&User> {
        self.get(id)
            .ok_or_else(|| TicketGridError::DanglingReference(id.to_string()))
    }

    /// Name to show for a user id. Unknown ids get a placeholder.
    pub fn display_name(&self, id: &str) -> String {
        match self.get(id) {
            Some(user) => user.name.clone(),
            None => format!("Unknown user ({id})"),
        }
    }

    /// Distinct user ids referenced by `tickets` that have no entry, in first-seen order.
    pub fn dangling_references(&self, tickets: &[Ticket]) -> Vec<String> {
        let mut missing: Vec<String> = Vec::new();
        for ticket in tickets {
            if !self.users.contains_key(&ticket.user_id) && !missing.contains(&ticket.user_id) {
                missing.push(ticket.user_id.clone());
            }
        }
        missing
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
