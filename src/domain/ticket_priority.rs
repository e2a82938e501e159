use serde::{Deserialize, Serialize};

use crate::domain::types::{EntityName, PriorityId};

/// Priority level a ticket can be filed under, e.g. `LOW` or `CRITICAL`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketPriority {
    pub id: PriorityId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTicketPriority {
    pub name: EntityName,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateTicketPriority {
    pub id: PriorityId,
    pub name: EntityName,
}
