use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::domain::ticket::{NewTicket, Ticket, TicketPatch, TicketStatus, UpdateTicket};
use crate::domain::types::TicketId;
use crate::models::{Reference, Resource, WritableResource};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /api/tickets` and `PUT /api/tickets`.
pub struct TicketPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: &'a str,
    pub description: &'a str,
    pub creation_date: Option<DateTime<Utc>>,
    pub status: Option<TicketStatus>,
    pub category: Reference,
    pub priority: Reference,
    pub user: Option<Reference>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
/// Body of `PATCH /api/tickets/{id}`; absent keys are left untouched.
pub struct TicketPatchPayload<'a> {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
}

impl<'a> From<&'a NewTicket> for TicketPayload<'a> {
    fn from(ticket: &'a NewTicket) -> Self {
        Self {
            id: None,
            title: ticket.title.as_str(),
            description: ticket.description.as_str(),
            creation_date: ticket.creation_date,
            status: Some(ticket.status),
            category: Reference::new(ticket.category),
            priority: Reference::new(ticket.priority),
            user: ticket.user.map(Reference::new),
        }
    }
}

impl<'a> From<&'a UpdateTicket> for TicketPayload<'a> {
    fn from(ticket: &'a UpdateTicket) -> Self {
        Self {
            id: Some(ticket.id.get()),
            title: ticket.title.as_str(),
            description: ticket.description.as_str(),
            creation_date: ticket.creation_date,
            status: ticket.status,
            category: Reference::new(ticket.category),
            priority: Reference::new(ticket.priority),
            user: ticket.user.map(Reference::new),
        }
    }
}

impl<'a> TicketPatchPayload<'a> {
    pub fn new(id: TicketId, patch: &'a TicketPatch) -> Self {
        Self {
            id: id.get(),
            title: patch.title.as_ref().map(|title| title.as_str()),
            description: patch.description.as_ref().map(|d| d.as_str()),
            creation_date: patch.creation_date,
            status: patch.status,
        }
    }
}

impl Resource for Ticket {
    type Id = TicketId;

    const COLLECTION: &'static str = "tickets";
    const ENTITY_NAME: &'static str = "ticket";

    fn id(&self) -> TicketId {
        self.id
    }
}

impl WritableResource for Ticket {
    type Create = NewTicket;
    type Update = UpdateTicket;
    type Patch = TicketPatch;

    fn create_payload(new: &NewTicket) -> serde_json::Result<Value> {
        serde_json::to_value(TicketPayload::from(new))
    }

    fn update_payload(update: &UpdateTicket) -> serde_json::Result<Value> {
        serde_json::to_value(TicketPayload::from(update))
    }

    fn patch_payload(id: TicketId, patch: &TicketPatch) -> serde_json::Result<Value> {
        serde_json::to_value(TicketPatchPayload::new(id, patch))
    }
}
