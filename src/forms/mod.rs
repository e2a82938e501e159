//! Form definitions backing ticket, category and priority editing.
//!
//! Forms hold raw user input. They are validated locally and only converted
//! into domain values when every check passes, so invalid input never reaches
//! the backend.

use std::collections::BTreeMap;

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod named;
pub mod submission;
pub mod ticket;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid value: {0}")]
    Constraint(#[from] TypeConstraintError),

    #[error("User is required.")]
    UserRequired,

    #[error("invalid ticket id")]
    InvalidTicketId,

    #[error("invalid category id")]
    InvalidCategoryId,

    #[error("invalid priority id")]
    InvalidPriorityId,

    #[error("invalid user id")]
    InvalidUserId,
}

/// First message reported for every invalid field, keyed by field name.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errors)| {
            errors.first().map(|error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect()
}
