//! Summary shown on the home dashboard.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::ticket::{Ticket, TicketStatus};

/// Number of tickets listed under "recent tickets".
pub const RECENT_TICKETS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub closed: usize,
    /// Tickets per priority name; tickets without a priority are not counted.
    pub by_priority: BTreeMap<String, usize>,
    /// First tickets of the list, in the order the backend returned them.
    pub recent: Vec<Ticket>,
}

impl DashboardStats {
    pub fn from_tickets(tickets: &[Ticket]) -> Self {
        let count = |status: TicketStatus| {
            tickets
                .iter()
                .filter(|ticket| ticket.status == Some(status))
                .count()
        };

        let mut by_priority = BTreeMap::new();
        for priority in tickets.iter().filter_map(|ticket| ticket.priority.as_ref()) {
            *by_priority.entry(priority.name.clone()).or_insert(0) += 1;
        }

        Self {
            total: tickets.len(),
            open: count(TicketStatus::Open),
            in_progress: count(TicketStatus::InProgress),
            resolved: count(TicketStatus::Resolved),
            closed: count(TicketStatus::Closed),
            by_priority,
            recent: tickets.iter().take(RECENT_TICKETS).cloned().collect(),
        }
    }

    pub fn priority_count(&self, name: &str) -> usize {
        self.by_priority.get(name).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ticket_priority::TicketPriority;
    use crate::domain::types::{PriorityId, TicketId};

    fn ticket(id: i64, status: Option<TicketStatus>, priority: Option<&str>) -> Ticket {
        Ticket {
            id: TicketId::new(id).unwrap(),
            title: format!("Ticket {id}"),
            description: "Something is broken somewhere".to_string(),
            creation_date: None,
            status,
            category: None,
            priority: priority.map(|name| TicketPriority {
                id: PriorityId::new(1).unwrap(),
                name: name.to_string(),
            }),
            user: None,
        }
    }

    #[test]
    fn counts_statuses_and_priorities() {
        let tickets = vec![
            ticket(1, Some(TicketStatus::Open), Some("HIGH")),
            ticket(2, Some(TicketStatus::Open), Some("LOW")),
            ticket(3, Some(TicketStatus::InProgress), Some("HIGH")),
            ticket(4, Some(TicketStatus::Closed), None),
            ticket(5, None, Some("CRITICAL")),
        ];

        let stats = DashboardStats::from_tickets(&tickets);

        assert_eq!(stats.total, 5);
        assert_eq!(stats.open, 2);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.resolved, 0);
        assert_eq!(stats.closed, 1);
        assert_eq!(stats.priority_count("HIGH"), 2);
        assert_eq!(stats.priority_count("MEDIUM"), 0);
    }

    #[test]
    fn recent_keeps_first_five_in_order() {
        let tickets: Vec<_> = (1..=8).map(|id| ticket(id, None, None)).collect();

        let stats = DashboardStats::from_tickets(&tickets);

        let ids: Vec<_> = stats.recent.iter().map(|t| t.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_list_yields_zeroes() {
        assert_eq!(DashboardStats::from_tickets(&[]), DashboardStats::default());
    }
}
