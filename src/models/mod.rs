//! Wire representations exchanged with the REST backend.
//!
//! Domain records deserialize straight from response bodies; write payloads
//! are built here from the validated domain values so the JSON shape the
//! backend expects (nested `{ "id": .. }` references, camelCase keys) stays
//! out of the domain layer.

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub mod config;
pub mod named;
pub mod ticket;
pub mod user;

/// Entity exposed as a collection under `/api/{COLLECTION}`.
pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    type Id: Copy + Display + PartialEq + Send + Sync + 'static;

    /// Collection path segment, e.g. `tickets`.
    const COLLECTION: &'static str;
    /// Entity name the backend uses in its alert headers.
    const ENTITY_NAME: &'static str;

    fn id(&self) -> Self::Id;
}

/// Resource that can be created, replaced, patched and deleted.
pub trait WritableResource: Resource {
    type Create: Send + Sync;
    type Update: Send + Sync;
    type Patch: Send + Sync;

    fn create_payload(new: &Self::Create) -> serde_json::Result<Value>;
    fn update_payload(update: &Self::Update) -> serde_json::Result<Value>;
    fn patch_payload(id: Self::Id, patch: &Self::Patch) -> serde_json::Result<Value>;
}

/// Reference to a related entity, serialized as `{ "id": n }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Reference {
    pub id: i64,
}

impl Reference {
    pub fn new(id: impl Into<i64>) -> Self {
        Self { id: id.into() }
    }
}
