//! Drives a [`ListView`] against a collection endpoint.
//!
//! The view decides *what* to fetch and returns a [`PendingFetch`]; these
//! functions perform it and feed the result back. Callers that need to
//! interleave several fetches can use [`ListView`] directly and hand each
//! result to [`complete_fetch`].

use crate::dto::api::Page;
use crate::list::{FetchOutcome, ListView, PendingFetch};
use crate::models::Resource;
use crate::notifications::{Notification, Notifications};
use crate::repository::EntityReader;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::services::ServiceResult;

/// Applies the result of fetch `seq`; failures become error notifications.
pub fn complete_fetch<T>(
    view: &mut ListView<T>,
    seq: u64,
    result: RepositoryResult<Page<T>>,
    notifications: &mut Notifications,
) -> FetchOutcome<RepositoryError> {
    let outcome = view.apply(seq, result);
    if let FetchOutcome::Failed(err) = &outcome {
        log::error!("Failed to fetch list: {err}");
        notifications.push(Notification::error(err.user_message()));
    }
    outcome
}

/// Performs an issued fetch and applies its result.
pub async fn perform_fetch<T, R>(
    repo: &R,
    view: &mut ListView<T>,
    fetch: PendingFetch,
    notifications: &mut Notifications,
) -> FetchOutcome<RepositoryError>
where
    T: Resource,
    R: EntityReader<T> + ?Sized,
{
    if let Some(location) = &fetch.navigate_to {
        log::debug!("Navigating to ?{location}");
    }
    let result = repo.list(&fetch.request).await;
    complete_fetch(view, fetch.seq, result, notifications)
}

/// Entry into the list page: resets the collection and loads the page the
/// location query asks for.
pub async fn mount_list<T, R>(
    repo: &R,
    view: &mut ListView<T>,
    location_query: &str,
    notifications: &mut Notifications,
) -> FetchOutcome<RepositoryError>
where
    T: Resource,
    R: EntityReader<T> + ?Sized,
{
    let fetch = view.mount(location_query);
    perform_fetch(repo, view, fetch, notifications).await
}

/// Reloads the current page, e.g. after a manual refresh.
pub async fn refresh_list<T, R>(
    repo: &R,
    view: &mut ListView<T>,
    notifications: &mut Notifications,
) -> FetchOutcome<RepositoryError>
where
    T: Resource,
    R: EntityReader<T> + ?Sized,
{
    let fetch = view.refetch();
    perform_fetch(repo, view, fetch, notifications).await
}

pub async fn sort_list<T, R>(
    repo: &R,
    view: &mut ListView<T>,
    field: &str,
    notifications: &mut Notifications,
) -> FetchOutcome<RepositoryError>
where
    T: Resource,
    R: EntityReader<T> + ?Sized,
{
    let fetch = view.change_sort(field);
    perform_fetch(repo, view, fetch, notifications).await
}

/// Moves to `page`; pages outside of the pagination control are rejected
/// without a request.
pub async fn select_page<T, R>(
    repo: &R,
    view: &mut ListView<T>,
    page: usize,
    notifications: &mut Notifications,
) -> ServiceResult<FetchOutcome<RepositoryError>>
where
    T: Resource,
    R: EntityReader<T> + ?Sized,
{
    let fetch = view.change_page(page).map_err(|err| {
        log::warn!("Ignoring page change: {err}");
        err
    })?;
    Ok(perform_fetch(repo, view, fetch, notifications).await)
}

/// Follows an external location change. `None` when nothing had to be
/// fetched.
pub async fn follow_location<T, R>(
    repo: &R,
    view: &mut ListView<T>,
    location_query: &str,
    notifications: &mut Notifications,
) -> Option<FetchOutcome<RepositoryError>>
where
    T: Resource,
    R: EntityReader<T> + ?Sized,
{
    let fetch = view.sync_from_url(location_query)?;
    Some(perform_fetch(repo, view, fetch, notifications).await)
}
