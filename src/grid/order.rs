//! Ordering of tickets within a column.
//!
//! All sorts are stable: tickets that compare equal keep their input order.

use std::cmp::Ordering;

use feruca::Collator;

use crate::types::{OrderingMode, Ticket};

/// Sort tickets by priority, urgent first
pub fn sort_by_priority(tickets: &mut [Ticket]) {
    tickets.sort_by(|a, b| b.priority.cmp(&a.priority));
}

/// Sort tickets by title, ascending
pub fn sort_by_title(tickets: &mut [Ticket]) {
    let mut collator = Collator::default();
    tickets.sort_by(|a, b| collator.collate(a.title.as_str(), b.title.as_str()));
}

/// Return a new vector holding `tickets` in the requested order.
///
/// `None` keeps the input order.
pub fn order_tickets(tickets: &[Ticket], ordering: Option<OrderingMode>) -> Vec<Ticket> {
    let mut ordered = tickets.to_vec();
    match ordering {
        Some(OrderingMode::Priority) => sort_by_priority(&mut ordered),
        Some(OrderingMode::Title) => sort_by_title(&mut ordered),
        None => {}
    }
    ordered
}

/// Locale-aware title comparison using the CLDR root collation.
///
/// Accented letters sort with their base letter, and titles that differ only
/// in case put the lowercase form first.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}
