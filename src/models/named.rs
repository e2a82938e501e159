//! Categories and priorities share the same `{ id, name }` shape.

use serde::Serialize;
use serde_json::Value;

use crate::domain::ticket_category::{NewTicketCategory, TicketCategory, UpdateTicketCategory};
use crate::domain::ticket_priority::{NewTicketPriority, TicketPriority, UpdateTicketPriority};
use crate::domain::types::{CategoryId, PriorityId};
use crate::models::{Resource, WritableResource};

#[derive(Debug, Serialize)]
pub struct NamedPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: &'a str,
}

impl Resource for TicketCategory {
    type Id = CategoryId;

    const COLLECTION: &'static str = "ticket-categories";
    const ENTITY_NAME: &'static str = "ticketCategory";

    fn id(&self) -> CategoryId {
        self.id
    }
}

impl WritableResource for TicketCategory {
    type Create = NewTicketCategory;
    type Update = UpdateTicketCategory;
    type Patch = UpdateTicketCategory;

    fn create_payload(new: &NewTicketCategory) -> serde_json::Result<Value> {
        serde_json::to_value(NamedPayload {
            id: None,
            name: new.name.as_str(),
        })
    }

    fn update_payload(update: &UpdateTicketCategory) -> serde_json::Result<Value> {
        serde_json::to_value(NamedPayload {
            id: Some(update.id.get()),
            name: update.name.as_str(),
        })
    }

    fn patch_payload(id: CategoryId, patch: &UpdateTicketCategory) -> serde_json::Result<Value> {
        serde_json::to_value(NamedPayload {
            id: Some(id.get()),
            name: patch.name.as_str(),
        })
    }
}

impl Resource for TicketPriority {
    type Id = PriorityId;

    const COLLECTION: &'static str = "ticket-priorities";
    const ENTITY_NAME: &'static str = "ticketPriority";

    fn id(&self) -> PriorityId {
        self.id
    }
}

impl WritableResource for TicketPriority {
    type Create = NewTicketPriority;
    type Update = UpdateTicketPriority;
    type Patch = UpdateTicketPriority;

    fn create_payload(new: &NewTicketPriority) -> serde_json::Result<Value> {
        serde_json::to_value(NamedPayload {
            id: None,
            name: new.name.as_str(),
        })
    }

    fn update_payload(update: &UpdateTicketPriority) -> serde_json::Result<Value> {
        serde_json::to_value(NamedPayload {
            id: Some(update.id.get()),
            name: update.name.as_str(),
        })
    }

    fn patch_payload(id: PriorityId, patch: &UpdateTicketPriority) -> serde_json::Result<Value> {
        serde_json::to_value(NamedPayload {
            id: Some(id.get()),
            name: patch.name.as_str(),
        })
    }
}
