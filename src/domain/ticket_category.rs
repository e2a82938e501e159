use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, EntityName};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketCategory {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTicketCategory {
    pub name: EntityName,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateTicketCategory {
    pub id: CategoryId,
    pub name: EntityName,
}
