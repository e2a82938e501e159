//! Category and priority maintenance.

use crate::domain::ticket_category::TicketCategory;
use crate::domain::ticket_priority::TicketPriority;
use crate::forms::named::NamedEntityForm;
use crate::list::ListView;
use crate::notifications::Notifications;
use crate::repository::EntityWriter;
use crate::services::ServiceResult;
use crate::services::entity::{create_entity, update_entity};

/// Creates a category, or renames category `id` when one is given.
pub async fn save_category<R>(
    repo: &R,
    view: &mut ListView<TicketCategory>,
    id: Option<i64>,
    form: &NamedEntityForm,
    notifications: &mut Notifications,
) -> ServiceResult<TicketCategory>
where
    R: EntityWriter<TicketCategory> + ?Sized,
{
    match id {
        Some(id) => {
            let update = form.to_update_category(id)?;
            update_entity(repo, view, &update, notifications).await
        }
        None => {
            let new = form.to_new_category()?;
            create_entity(repo, view, &new, notifications).await
        }
    }
}

/// Creates a priority, or renames priority `id` when one is given.
pub async fn save_priority<R>(
    repo: &R,
    view: &mut ListView<TicketPriority>,
    id: Option<i64>,
    form: &NamedEntityForm,
    notifications: &mut Notifications,
) -> ServiceResult<TicketPriority>
where
    R: EntityWriter<TicketPriority> + ?Sized,
{
    match id {
        Some(id) => {
            let update = form.to_update_priority(id)?;
            update_entity(repo, view, &update, notifications).await
        }
        None => {
            let new = form.to_new_priority()?;
            create_entity(repo, view, &new, notifications).await
        }
    }
}
