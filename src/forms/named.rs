use serde::Deserialize;
use validator::Validate;

use crate::domain::ticket_category::{NewTicketCategory, UpdateTicketCategory};
use crate::domain::ticket_priority::{NewTicketPriority, UpdateTicketPriority};
use crate::domain::types::{CategoryId, EntityName, PriorityId};
use crate::forms::FormError;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
/// Form used to create or rename a ticket category or priority.
pub struct NamedEntityForm {
    #[validate(length(min = 1, message = "This field is required."))]
    pub name: String,
}

impl NamedEntityForm {
    fn validated_name(&self) -> Result<EntityName, FormError> {
        let trimmed = Self {
            name: self.name.trim().to_string(),
        };
        trimmed.validate()?;
        Ok(EntityName::new(trimmed.name)?)
    }

    pub fn to_new_category(&self) -> Result<NewTicketCategory, FormError> {
        Ok(NewTicketCategory {
            name: self.validated_name()?,
        })
    }

    pub fn to_update_category(&self, id: i64) -> Result<UpdateTicketCategory, FormError> {
        let id = CategoryId::new(id).map_err(|_| FormError::InvalidCategoryId)?;
        Ok(UpdateTicketCategory {
            id,
            name: self.validated_name()?,
        })
    }

    pub fn to_new_priority(&self) -> Result<NewTicketPriority, FormError> {
        Ok(NewTicketPriority {
            name: self.validated_name()?,
        })
    }

    pub fn to_update_priority(&self, id: i64) -> Result<UpdateTicketPriority, FormError> {
        let id = PriorityId::new(id).map_err(|_| FormError::InvalidPriorityId)?;
        Ok(UpdateTicketPriority {
            id,
            name: self.validated_name()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_a_validation_error() {
        let form = NamedEntityForm {
            name: "   ".to_string(),
        };
        assert!(matches!(form.to_new_category(), Err(FormError::Validation(_))));
    }

    #[test]
    fn name_is_trimmed() {
        let form = NamedEntityForm {
            name: "  Software ".to_string(),
        };
        assert_eq!(form.to_new_priority().unwrap().name.as_str(), "Software");
        assert_eq!(form.to_update_category(3).unwrap().id.get(), 3);
        assert!(matches!(
            form.to_update_priority(0),
            Err(FormError::InvalidPriorityId)
        ));
    }
}
