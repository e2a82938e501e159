use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::domain::ticket::{NewTicket, Ticket, TicketStatus, UpdateTicket};
use crate::domain::types::{
    CategoryId, PriorityId, TicketDescription, TicketId, TicketTitle, UserId,
};
use crate::forms::FormError;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
/// Input of the ticket create/edit form. Relations are selected by id.
pub struct TicketForm {
    #[validate(length(min = 5, message = "Title must be at least 5 characters long"))]
    pub title: String,
    #[validate(length(min = 20, message = "Description must be at least 20 characters long"))]
    pub description: String,
    #[validate(required(message = "Please select a category"))]
    pub category: Option<i64>,
    #[validate(required(message = "Please select a priority"))]
    pub priority: Option<i64>,
    #[serde(default)]
    pub user: Option<i64>,
    #[serde(default)]
    pub status: Option<TicketStatus>,
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
}

impl TicketForm {
    /// Pre-fills the edit form from a loaded ticket; status defaults to `OPEN`.
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            category: ticket.category.as_ref().map(|category| category.id.get()),
            priority: ticket.priority.as_ref().map(|priority| priority.id.get()),
            user: ticket.user.as_ref().map(|user| user.id.get()),
            status: Some(ticket.status.unwrap_or_default()),
            creation_date: ticket.creation_date,
        }
    }

    fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            ..self.clone()
        }
    }

    /// Runs the field checks on the trimmed input.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        self.trimmed().validate()
    }

    pub(crate) fn relations(&self) -> Result<(CategoryId, PriorityId, Option<UserId>), FormError> {
        let category = self
            .category
            .ok_or(FormError::InvalidCategoryId)
            .and_then(|id| CategoryId::new(id).map_err(|_| FormError::InvalidCategoryId))?;
        let priority = self
            .priority
            .ok_or(FormError::InvalidPriorityId)
            .and_then(|id| PriorityId::new(id).map_err(|_| FormError::InvalidPriorityId))?;
        let user = self
            .user
            .map(|id| UserId::new(id).map_err(|_| FormError::InvalidUserId))
            .transpose()?;
        Ok((category, priority, user))
    }

    /// Converts the form into a ticket to create. Creating through the admin
    /// form requires picking the owning user.
    pub fn to_new_ticket(&self) -> Result<NewTicket, FormError> {
        self.check()?;
        let (category, priority, user) = self.relations()?;
        let user = user.ok_or(FormError::UserRequired)?;

        let mut ticket = NewTicket::new(
            TicketTitle::new(self.title.as_str())?,
            TicketDescription::new(self.description.as_str())?,
            category,
            priority,
            Some(user),
        );
        ticket.status = self.status.unwrap_or_default();
        ticket.creation_date = self.creation_date;
        Ok(ticket)
    }

    /// Converts the form into a full replacement of ticket `id`.
    pub fn to_update_ticket(&self, id: i64) -> Result<UpdateTicket, FormError> {
        let id = TicketId::new(id).map_err(|_| FormError::InvalidTicketId)?;
        self.check()?;
        let (category, priority, user) = self.relations()?;

        Ok(UpdateTicket {
            id,
            title: TicketTitle::new(self.title.as_str())?,
            description: TicketDescription::new(self.description.as_str())?,
            creation_date: self.creation_date,
            status: self.status,
            category,
            priority,
            user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::field_messages;

    fn valid_form() -> TicketForm {
        TicketForm {
            title: "Email outage".to_string(),
            description: "No messages delivered since 9am today".to_string(),
            category: Some(1),
            priority: Some(2),
            user: Some(1),
            ..TicketForm::default()
        }
    }

    #[test]
    fn valid_form_converts_to_new_ticket() {
        let ticket = valid_form().to_new_ticket().unwrap();
        assert_eq!(ticket.title.as_str(), "Email outage");
        assert_eq!(ticket.status, TicketStatus::Open);
        assert_eq!(ticket.user.map(UserId::get), Some(1));
    }

    #[test]
    fn whitespace_does_not_count_towards_length() {
        let form = TicketForm {
            title: "  abc    ".to_string(),
            description: "   short    ".to_string(),
            category: None,
            priority: None,
            ..TicketForm::default()
        };

        let errors = field_messages(&form.check().unwrap_err());

        assert_eq!(
            errors.get("title").map(String::as_str),
            Some("Title must be at least 5 characters long")
        );
        assert_eq!(
            errors.get("description").map(String::as_str),
            Some("Description must be at least 20 characters long")
        );
        assert_eq!(
            errors.get("category").map(String::as_str),
            Some("Please select a category")
        );
        assert_eq!(
            errors.get("priority").map(String::as_str),
            Some("Please select a priority")
        );
    }

    #[test]
    fn creating_requires_a_user() {
        let form = TicketForm {
            user: None,
            ..valid_form()
        };
        assert!(matches!(form.to_new_ticket(), Err(FormError::UserRequired)));
    }

    #[test]
    fn update_keeps_optional_user_and_status() {
        let form = TicketForm {
            user: None,
            status: Some(TicketStatus::Resolved),
            ..valid_form()
        };

        let update = form.to_update_ticket(8).unwrap();

        assert_eq!(update.id.get(), 8);
        assert!(update.user.is_none());
        assert_eq!(update.status, Some(TicketStatus::Resolved));
    }

    #[test]
    fn update_rejects_invalid_identifiers() {
        assert!(matches!(
            valid_form().to_update_ticket(0),
            Err(FormError::InvalidTicketId)
        ));
        let form = TicketForm {
            category: Some(-1),
            ..valid_form()
        };
        assert!(matches!(
            form.to_update_ticket(1),
            Err(FormError::InvalidCategoryId)
        ));
    }
}
