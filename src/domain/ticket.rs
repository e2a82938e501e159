use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ticket_category::TicketCategory;
use crate::domain::ticket_priority::TicketPriority;
use crate::domain::types::{
    CategoryId, PriorityId, TicketDescription, TicketId, TicketTitle, TypeConstraintError, UserId,
};
use crate::domain::user::User;

/// Lifecycle state of a ticket.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    /// Wire representation used by the backend.
    pub const fn as_str(self) -> &'static str {
        match self {
            TicketStatus::Open => "OPEN",
            TicketStatus::InProgress => "IN_PROGRESS",
            TicketStatus::Resolved => "RESOLVED",
            TicketStatus::Closed => "CLOSED",
        }
    }
}

impl Display for TicketStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        TicketStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| TypeConstraintError::InvalidValue(s.to_string()))
    }
}

/// Ticket as read from `/api/tickets`, relations resolved by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub description: String,
    pub creation_date: Option<DateTime<Utc>>,
    pub status: Option<TicketStatus>,
    pub category: Option<TicketCategory>,
    pub priority: Option<TicketPriority>,
    pub user: Option<User>,
}

/// Validated ticket ready to be created.
#[derive(Clone, Debug, PartialEq)]
pub struct NewTicket {
    pub title: TicketTitle,
    pub description: TicketDescription,
    pub creation_date: Option<DateTime<Utc>>,
    pub status: TicketStatus,
    pub category: CategoryId,
    pub priority: PriorityId,
    pub user: Option<UserId>,
}

impl NewTicket {
    /// Builds a ticket in the `OPEN` state; the backend stamps the creation
    /// date when none is given.
    #[must_use]
    pub fn new(
        title: TicketTitle,
        description: TicketDescription,
        category: CategoryId,
        priority: PriorityId,
        user: Option<UserId>,
    ) -> Self {
        Self {
            title,
            description,
            creation_date: None,
            status: TicketStatus::Open,
            category,
            priority,
            user,
        }
    }

    #[must_use]
    pub fn created_at(mut self, creation_date: DateTime<Utc>) -> Self {
        self.creation_date = Some(creation_date);
        self
    }
}

/// Full replacement of an existing ticket (`PUT`).
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateTicket {
    pub id: TicketId,
    pub title: TicketTitle,
    pub description: TicketDescription,
    pub creation_date: Option<DateTime<Utc>>,
    pub status: Option<TicketStatus>,
    pub category: CategoryId,
    pub priority: PriorityId,
    pub user: Option<UserId>,
}

/// Partial update of a ticket (`PATCH`); `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TicketPatch {
    pub title: Option<TicketTitle>,
    pub description: Option<TicketDescription>,
    pub creation_date: Option<DateTime<Utc>>,
    pub status: Option<TicketStatus>,
}

impl TicketPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.creation_date.is_none()
            && self.status.is_none()
    }
}
