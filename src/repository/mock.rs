//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::ticket::{NewTicket, Ticket, TicketPatch, UpdateTicket};
use crate::domain::types::TicketId;
use crate::dto::api::{Page, PageRequest};
use crate::repository::errors::RepositoryResult;
use crate::repository::{Acknowledged, EntityReader, EntityWriter};

mock! {
    pub TicketRepository {}

    #[async_trait]
    impl EntityReader<Ticket> for TicketRepository {
        async fn list(&self, request: &PageRequest) -> RepositoryResult<Page<Ticket>>;
        async fn list_all(&self) -> RepositoryResult<Vec<Ticket>>;
        async fn get(&self, id: TicketId) -> RepositoryResult<Ticket>;
    }

    #[async_trait]
    impl EntityWriter<Ticket> for TicketRepository {
        async fn create(&self, new: &NewTicket) -> RepositoryResult<Acknowledged<Ticket>>;
        async fn update(&self, update: &UpdateTicket) -> RepositoryResult<Acknowledged<Ticket>>;
        async fn patch(
            &self,
            id: TicketId,
            patch: &TicketPatch,
        ) -> RepositoryResult<Acknowledged<Ticket>>;
        async fn delete(&self, id: TicketId) -> RepositoryResult<Acknowledged<()>>;
    }
}
