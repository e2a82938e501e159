//! Choices offered by the ticket form's select boxes.

use serde::Serialize;

use crate::domain::ticket_category::TicketCategory;
use crate::domain::ticket_priority::TicketPriority;
use crate::domain::user::User;
use crate::repository::EntityReader;
use crate::services::ServiceResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TicketOptions {
    pub categories: Vec<TicketCategory>,
    pub priorities: Vec<TicketPriority>,
    pub users: Vec<User>,
}

/// Loads every category, priority and user concurrently.
pub async fn load_ticket_options<C, P, U>(
    categories: &C,
    priorities: &P,
    users: &U,
) -> ServiceResult<TicketOptions>
where
    C: EntityReader<TicketCategory> + ?Sized,
    P: EntityReader<TicketPriority> + ?Sized,
    U: EntityReader<User> + ?Sized,
{
    let (categories, priorities, users) =
        tokio::try_join!(categories.list_all(), priorities.list_all(), users.list_all())
            .map_err(|err| {
                log::error!("Failed to load ticket options: {err}");
                err
            })?;

    Ok(TicketOptions {
        categories,
        priorities,
        users,
    })
}
