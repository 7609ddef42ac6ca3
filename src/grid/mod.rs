//! Grouping and ordering of tickets into board columns.
//!
//! [`load_grid`] is the single entry point used by the presentation layer:
//! tickets are ordered first, then partitioned, so the order inside every
//! column always reflects the chosen [`OrderingMode`](crate::types::OrderingMode).

pub mod group;
pub mod order;
pub mod users;

pub use group::{GridData, Group, GroupKind, group_tickets};
pub use order::{compare_titles, order_tickets};
pub use users::{UserIndex, build_user_index};

use crate::types::{DisplaySettings, Ticket};

/// Order, then group, a ticket snapshot. Pure and idempotent.
pub fn load_grid(tickets: &[Ticket], settings: DisplaySettings) -> GridData {
    tracing::debug!(
        "building grid for {} tickets (grouping: {}, ordering: {})",
        tickets.len(),
        settings.grouping,
        settings
            .ordering
            .map(|o| o.to_string())
            .unwrap_or_else(|| "none".to_string())
    );
    let ordered = order_tickets(tickets, settings.ordering);
    group_tickets(ordered, settings.grouping)
}

/// [`load_grid`] for raw mode strings.
///
/// An unknown grouping falls back to status; an unknown ordering keeps the input order.
pub fn load_grid_raw(tickets: &[Ticket], grouping: &str, ordering: &str) -> GridData {
    load_grid(tickets, DisplaySettings::from_raw(grouping, ordering))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GroupingMode, OrderingMode, TicketId, TicketStatus};
    use std::cmp::Ordering;

    fn ticket(id: &str, title: &str, status: TicketStatus, priority: i64, user: &str) -> Ticket {
        Ticket {
            id: TicketId::new(id),
            title: title.to_string(),
            status,
            priority,
            user_id: user.to_string(),
            tag: vec![],
        }
    }

    fn sample() -> Vec<Ticket> {
        vec![
            ticket("CAM-1", "Update user profile page UI", TicketStatus::Todo, 4, "usr-1"),
            ticket("CAM-2", "Add multi-language support", TicketStatus::InProgress, 3, "usr-2"),
            ticket("CAM-3", "Optimize database queries", TicketStatus::InProgress, 1, "usr-2"),
            ticket("CAM-4", "implement email notifications", TicketStatus::InProgress, 3, "usr-1"),
            ticket("CAM-5", "Enhance search functionality", TicketStatus::Todo, 0, "usr-5"),
            ticket("CAM-6", "Third-party payment gateway", TicketStatus::Todo, 1, "usr-2"),
            ticket("CAM-7", "Create onboarding tutorial", TicketStatus::Backlog, 2, "usr-1"),
            ticket("CAM-8", "Implement role-based access", TicketStatus::InProgress, 3, "usr-3"),
            ticket("CAM-9", "Upgrade server infrastructure", TicketStatus::Todo, 2, "usr-5"),
            ticket("CAM-10", "Conduct security vulnerability", TicketStatus::Backlog, 4, "usr-4"),
            ticket("CAM-11", "Broken ticket", TicketStatus::Done, 7, "usr-4"),
            ticket("CAM-12", "Éclair icon refresh", TicketStatus::Todo, 2, "usr-5"),
        ]
    }

    fn all_settings() -> Vec<DisplaySettings> {
        let mut settings = Vec::new();
        for grouping in [GroupingMode::Status, GroupingMode::Priority, GroupingMode::User] {
            for ordering in [Some(OrderingMode::Priority), Some(OrderingMode::Title), None] {
                settings.push(DisplaySettings { grouping, ordering });
            }
        }
        settings
    }

    fn sorted_ids(tickets: impl Iterator<Item = Ticket>) -> Vec<String> {
        let mut ids: Vec<String> = tickets.map(|t| t.id.to_string()).collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_status_grouping_completeness() {
        for ordering in [Some(OrderingMode::Priority), Some(OrderingMode::Title), None] {
            for tickets in [vec![], sample()] {
                let grid = load_grid(
                    &tickets,
                    DisplaySettings {
                        grouping: GroupingMode::Status,
                        ordering,
                    },
                );
                assert_eq!(
                    grid.keys().collect::<Vec<_>>(),
                    vec!["Backlog", "Todo", "In progress", "Done", "Canceled"]
                );
            }
        }
    }

    #[test]
    fn test_priority_grouping_completeness() {
        let tickets: Vec<Ticket> = sample().into_iter().filter(|t| t.priority <= 4).collect();
        for input in [vec![], tickets] {
            let grid = load_grid(
                &input,
                DisplaySettings::new(GroupingMode::Priority, OrderingMode::Title),
            );
            assert_eq!(
                grid.keys().collect::<Vec<_>>(),
                vec!["No priority", "Low", "Medium", "High", "Urgent"]
            );
        }
    }

    #[test]
    fn test_user_grouping_exactness() {
        let tickets = sample();
        let grid = load_grid(
            &tickets,
            DisplaySettings::new(GroupingMode::User, OrderingMode::Priority),
        );
        let mut keys: Vec<&str> = grid.keys().collect();
        keys.sort();
        let mut expected: Vec<&str> = tickets.iter().map(|t| t.user_id.as_str()).collect();
        expected.sort();
        expected.dedup();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_partition_totality() {
        let tickets = sample();
        let expected = sorted_ids(tickets.clone().into_iter());
        for settings in all_settings() {
            let grid = load_grid(&tickets, settings);
            let actual = sorted_ids(grid.groups().iter().flat_map(|g| g.tickets.clone()));
            assert_eq!(actual, expected, "settings: {settings:?}");
        }
    }

    #[test]
    fn test_priority_order_within_groups() {
        let tickets = sample();
        for grouping in [GroupingMode::Status, GroupingMode::Priority, GroupingMode::User] {
            let grid = load_grid(&tickets, DisplaySettings::new(grouping, OrderingMode::Priority));
            for group in grid.groups() {
                for pair in group.tickets.windows(2) {
                    assert!(pair[0].priority >= pair[1].priority);
                }
            }
        }
    }

    #[test]
    fn test_title_order_within_groups() {
        let tickets = sample();
        for grouping in [GroupingMode::Status, GroupingMode::Priority, GroupingMode::User] {
            let grid = load_grid(&tickets, DisplaySettings::new(grouping, OrderingMode::Title));
            for group in grid.groups() {
                for pair in group.tickets.windows(2) {
                    assert_ne!(
                        compare_titles(&pair[0].title, &pair[1].title),
                        Ordering::Greater
                    );
                }
            }
        }

        let grid = load_grid(
            &tickets,
            DisplaySettings::new(GroupingMode::Status, OrderingMode::Title),
        );
        assert_eq!(
            ids(grid.get("Todo").unwrap()),
            vec!["CAM-12", "CAM-5", "CAM-6", "CAM-1", "CAM-9"]
        );
    }

    #[test]
    fn test_idempotence() {
        let tickets = sample();
        for settings in all_settings() {
            assert_eq!(load_grid(&tickets, settings), load_grid(&tickets, settings));
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let tickets = sample();
        let before = tickets.clone();
        for settings in all_settings() {
            let _ = load_grid(&tickets, settings);
        }
        assert_eq!(tickets, before);
    }

    fn two_tickets() -> Vec<Ticket> {
        vec![
            ticket("1", "B", TicketStatus::Todo, 3, "u1"),
            ticket("2", "A", TicketStatus::Todo, 1, "u1"),
        ]
    }

    fn ids(tickets: &[Ticket]) -> Vec<&str> {
        tickets.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_status_grouping_title_ordering_example() {
        let grid = load_grid_raw(&two_tickets(), "status", "title");
        assert_eq!(
            grid.keys().collect::<Vec<_>>(),
            vec!["Backlog", "Todo", "In progress", "Done", "Canceled"]
        );
        assert!(grid.get("Backlog").unwrap().is_empty());
        assert_eq!(ids(grid.get("Todo").unwrap()), vec!["2", "1"]);
        assert!(grid.get("In progress").unwrap().is_empty());
        assert!(grid.get("Done").unwrap().is_empty());
        assert!(grid.get("Canceled").unwrap().is_empty());
    }

    #[test]
    fn test_priority_grouping_priority_ordering_example() {
        let grid = load_grid_raw(&two_tickets(), "priority", "priority");
        assert_eq!(
            grid.keys().collect::<Vec<_>>(),
            vec!["No priority", "Low", "Medium", "High", "Urgent"]
        );
        assert!(grid.get("No priority").unwrap().is_empty());
        assert_eq!(ids(grid.get("Low").unwrap()), vec!["2"]);
        assert!(grid.get("Medium").unwrap().is_empty());
        assert_eq!(ids(grid.get("High").unwrap()), vec!["1"]);
        assert!(grid.get("Urgent").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_grouping_falls_back_to_status() {
        let tickets = sample();
        let fallback = load_grid_raw(&tickets, "assignee", "title");
        let status = load_grid_raw(&tickets, "status", "title");
        assert_eq!(fallback, status);
    }

    #[test]
    fn test_mode_strings_are_case_sensitive() {
        let tickets = sample();
        let grid = load_grid_raw(&tickets, "USER", "Title");
        assert_eq!(
            grid.keys().collect::<Vec<_>>(),
            vec!["Backlog", "Todo", "In progress", "Done", "Canceled"]
        );
        assert_eq!(
            ids(grid.get("Todo").unwrap()),
            vec!["CAM-1", "CAM-5", "CAM-6", "CAM-9", "CAM-12"]
        );
    }

    #[test]
    fn test_unknown_ordering_keeps_input_order() {
        let tickets = two_tickets();
        let grid = load_grid_raw(&tickets, "status", "created");
        assert_eq!(ids(grid.get("Todo").unwrap()), vec!["1", "2"]);
    }
}
