//! Application state shared by every view.
//!
//! Created once at startup and passed by reference; nothing in it is reset
//! unless asked to through [`AppState::reset`].

use crate::domain::ticket::Ticket;
use crate::domain::ticket_category::TicketCategory;
use crate::domain::ticket_priority::TicketPriority;
use crate::domain::user::User;
use crate::list::{ListView, StaleResponsePolicy};
use crate::models::config::ClientConfig;
use crate::notifications::Notifications;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Ticket,
    Category,
    Priority,
    User,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub tickets: ListView<Ticket>,
    pub categories: ListView<TicketCategory>,
    pub priorities: ListView<TicketPriority>,
    pub users: ListView<User>,
    pub notifications: Notifications,
}

impl AppState {
    pub fn new(items_per_page: usize, policy: StaleResponsePolicy) -> Self {
        Self {
            tickets: ListView::initialize("", items_per_page, policy),
            categories: ListView::initialize("", items_per_page, policy),
            priorities: ListView::initialize("", items_per_page, policy),
            users: ListView::initialize("", items_per_page, policy),
            notifications: Notifications::default(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.items_per_page, config.stale_responses)
    }

    /// Empties the collection of one resource, e.g. when a create form opens.
    pub fn reset(&mut self, kind: ResourceKind) {
        match kind {
            ResourceKind::Ticket => self.tickets.reset(),
            ResourceKind::Category => self.categories.reset(),
            ResourceKind::Priority => self.priorities.reset(),
            ResourceKind::User => self.users.reset(),
        }
    }
}
