//! Detail and write operations shared by every resource.

use crate::list::{FetchOutcome, ListView};
use crate::models::{Resource, WritableResource};
use crate::notifications::{Notification, Notifications};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{Acknowledged, EntityReader, EntityWriter};
use crate::services::list::perform_fetch;
use crate::services::ServiceResult;

/// Loads one entity into the detail/edit slot of the view.
pub async fn load_entity<E, R>(
    repo: &R,
    view: &mut ListView<E>,
    id: E::Id,
    notifications: &mut Notifications,
) -> ServiceResult<E>
where
    E: Resource,
    R: EntityReader<E> + ?Sized,
{
    view.begin_entity_load();
    match repo.get(id).await {
        Ok(entity) => {
            view.entity_loaded(entity.clone());
            Ok(entity)
        }
        Err(err) => {
            log::error!("Failed to load {} {id}: {err}", E::ENTITY_NAME);
            view.entity_load_failed(err.user_message());
            notifications.push(Notification::error(err.user_message()));
            Err(err.into())
        }
    }
}

/// Records the outcome of a write in the view and the notification queue.
fn finish_write<E, T>(
    view: &mut ListView<E>,
    action: &str,
    result: RepositoryResult<Acknowledged<T>>,
    notifications: &mut Notifications,
) -> RepositoryResult<T> {
    match result {
        Ok(Acknowledged { value, alert }) => {
            view.update_succeeded();
            if let Some(alert) = alert {
                notifications.push(alert);
            }
            Ok(value)
        }
        Err(err) => {
            log::error!("Failed to {action}: {err}");
            view.update_failed(err.user_message());
            notifications.push(Notification::error(err.user_message()));
            Err(err)
        }
    }
}

pub async fn create_entity<E, R>(
    repo: &R,
    view: &mut ListView<E>,
    new: &E::Create,
    notifications: &mut Notifications,
) -> ServiceResult<E>
where
    E: WritableResource,
    R: EntityWriter<E> + ?Sized,
{
    view.begin_update();
    let result = repo.create(new).await;
    let created = finish_write(view, &format!("create {}", E::ENTITY_NAME), result, notifications)?;
    view.entity_loaded(created.clone());
    Ok(created)
}

pub async fn update_entity<E, R>(
    repo: &R,
    view: &mut ListView<E>,
    update: &E::Update,
    notifications: &mut Notifications,
) -> ServiceResult<E>
where
    E: WritableResource,
    R: EntityWriter<E> + ?Sized,
{
    view.begin_update();
    let result = repo.update(update).await;
    let updated = finish_write(view, &format!("update {}", E::ENTITY_NAME), result, notifications)?;
    view.entity_loaded(updated.clone());
    Ok(updated)
}

pub async fn patch_entity<E, R>(
    repo: &R,
    view: &mut ListView<E>,
    id: E::Id,
    patch: &E::Patch,
    notifications: &mut Notifications,
) -> ServiceResult<E>
where
    E: WritableResource,
    R: EntityWriter<E> + ?Sized,
{
    view.begin_update();
    let result = repo.patch(id, patch).await;
    let action = format!("patch {} {id}", E::ENTITY_NAME);
    let patched = finish_write(view, &action, result, notifications)?;
    view.entity_loaded(patched.clone());
    Ok(patched)
}

/// Deletes entity `id`, then reloads the current page so the list and its
/// total reflect the removal. When the page it was on no longer exists the
/// view moves to the new last page.
pub async fn delete_entity<E, R>(
    repo: &R,
    view: &mut ListView<E>,
    id: E::Id,
    notifications: &mut Notifications,
) -> ServiceResult<FetchOutcome<RepositoryError>>
where
    E: WritableResource,
    R: EntityReader<E> + EntityWriter<E> + ?Sized,
{
    view.begin_update();
    let result = EntityWriter::<E>::delete(repo, id).await;
    finish_write(view, &format!("delete {} {id}", E::ENTITY_NAME), result, notifications)?;
    if view
        .collection()
        .entity
        .as_ref()
        .is_some_and(|shown| shown.id() == id)
    {
        view.entity_removed();
    }

    let fetch = view.refetch();
    let outcome = perform_fetch(repo, view, fetch, notifications).await;
    if !matches!(outcome, FetchOutcome::Applied) {
        return Ok(outcome);
    }
    match view.clamp_to_last_page() {
        Some(fetch) => Ok(perform_fetch(repo, view, fetch, notifications).await),
        None => Ok(outcome),
    }
}
