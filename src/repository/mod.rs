//! Gateways to the REST backend.
//!
//! Services depend on the [`EntityReader`] and [`EntityWriter`] traits only;
//! [`rest::RestRepository`] implements them over HTTP for every resource.

use async_trait::async_trait;

use crate::dto::api::{Page, PageRequest};
use crate::models::{Resource, WritableResource};
use crate::notifications::Notification;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod rest;

/// Result of a write together with the alert the backend attached to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Acknowledged<T> {
    pub value: T,
    pub alert: Option<Notification>,
}

impl<T> Acknowledged<T> {
    pub fn new(value: T, alert: Option<Notification>) -> Self {
        Self { value, alert }
    }

    pub fn silent(value: T) -> Self {
        Self { value, alert: None }
    }
}

#[async_trait]
pub trait EntityReader<E: Resource>: Send + Sync {
    /// One page of the collection and the collection's total size.
    async fn list(&self, request: &PageRequest) -> RepositoryResult<Page<E>>;
    /// The whole collection, unpaginated. Used for option lists.
    async fn list_all(&self) -> RepositoryResult<Vec<E>>;
    async fn get(&self, id: E::Id) -> RepositoryResult<E>;
}

#[async_trait]
pub trait EntityWriter<E: WritableResource>: Send + Sync {
    async fn create(&self, new: &E::Create) -> RepositoryResult<Acknowledged<E>>;
    /// Full replacement, sent to the collection path with the id in the body.
    async fn update(&self, update: &E::Update) -> RepositoryResult<Acknowledged<E>>;
    async fn patch(&self, id: E::Id, patch: &E::Patch) -> RepositoryResult<Acknowledged<E>>;
    async fn delete(&self, id: E::Id) -> RepositoryResult<Acknowledged<()>>;
}
