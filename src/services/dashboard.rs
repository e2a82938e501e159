use crate::domain::ticket::Ticket;
use crate::dto::api::PageRequest;
use crate::dto::dashboard::DashboardStats;
use crate::notifications::{Notification, Notifications};
use crate::repository::EntityReader;
use crate::services::ServiceResult;

/// Builds the home dashboard from the first page of tickets.
pub async fn load_dashboard<R>(
    repo: &R,
    items_per_page: usize,
    notifications: &mut Notifications,
) -> ServiceResult<DashboardStats>
where
    R: EntityReader<Ticket> + ?Sized,
{
    let request = PageRequest {
        size: items_per_page,
        ..PageRequest::default()
    };

    match repo.list(&request).await {
        Ok(page) => Ok(DashboardStats::from_tickets(&page.items)),
        Err(err) => {
            log::error!("Failed to load dashboard: {err}");
            notifications.push(Notification::error(err.user_message()));
            Err(err.into())
        }
    }
}
