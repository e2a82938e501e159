//! Ticket-specific workflows: form submission and partial updates.
//!
//! Every form is validated before anything is sent; invalid input never
//! reaches the backend.

use chrono::{DateTime, Utc};

use crate::domain::ticket::{Ticket, TicketPatch};
use crate::domain::types::{TicketId, UserId};
use crate::forms::submission::SubmissionWizard;
use crate::forms::ticket::TicketForm;
use crate::list::ListView;
use crate::notifications::Notifications;
use crate::repository::EntityWriter;
use crate::services::entity::{create_entity, patch_entity, update_entity};
use crate::services::{ServiceError, ServiceResult};

/// Creates a ticket from the admin form.
pub async fn create_ticket<R>(
    repo: &R,
    view: &mut ListView<Ticket>,
    form: &TicketForm,
    notifications: &mut Notifications,
) -> ServiceResult<Ticket>
where
    R: EntityWriter<Ticket> + ?Sized,
{
    let new_ticket = form.to_new_ticket().map_err(|err| {
        log::debug!("Rejected ticket form: {err}");
        err
    })?;
    create_entity(repo, view, &new_ticket, notifications).await
}

/// Replaces ticket `id` with the content of the edit form.
pub async fn update_ticket<R>(
    repo: &R,
    view: &mut ListView<Ticket>,
    id: i64,
    form: &TicketForm,
    notifications: &mut Notifications,
) -> ServiceResult<Ticket>
where
    R: EntityWriter<Ticket> + ?Sized,
{
    let update = form.to_update_ticket(id).map_err(|err| {
        log::debug!("Rejected ticket form for {id}: {err}");
        err
    })?;
    update_entity(repo, view, &update, notifications).await
}

pub async fn patch_ticket<R>(
    repo: &R,
    view: &mut ListView<Ticket>,
    id: TicketId,
    patch: &TicketPatch,
    notifications: &mut Notifications,
) -> ServiceResult<Ticket>
where
    R: EntityWriter<Ticket> + ?Sized,
{
    if patch.is_empty() {
        return Err(ServiceError::EmptyPatch);
    }
    patch_entity(repo, view, id, patch, notifications).await
}

/// Submits the wizard as a new `OPEN` ticket owned by `user`, stamped `now`.
pub async fn submit_ticket<R>(
    repo: &R,
    view: &mut ListView<Ticket>,
    wizard: &mut SubmissionWizard,
    user: Option<UserId>,
    now: DateTime<Utc>,
    notifications: &mut Notifications,
) -> ServiceResult<Ticket>
where
    R: EntityWriter<Ticket> + ?Sized,
{
    let new_ticket = wizard.submit(user, now)?;
    create_entity(repo, view, &new_ticket, notifications).await
}
