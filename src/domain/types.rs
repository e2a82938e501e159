//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce the invariants the backend expects (positive
//! identifiers, minimum ticket text lengths, non-blank names) so that once a
//! value reaches the domain layer it can be sent without further checks.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of characters in a trimmed ticket title.
pub const MIN_TITLE_LENGTH: usize = 5;
/// Minimum number of characters in a trimmed ticket description.
pub const MIN_DESCRIPTION_LENGTH: usize = 20;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string is shorter than the required minimum.
    #[error("value must be at least {min} characters long")]
    TooShort { min: usize },
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Macro to generate lightweight newtypes for server-assigned identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i64);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i64` backing this identifier.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(TicketId, "Server-assigned identifier of a ticket.");
id_newtype!(CategoryId, "Server-assigned identifier of a ticket category.");
id_newtype!(PriorityId, "Server-assigned identifier of a ticket priority.");
id_newtype!(UserId, "Server-assigned identifier of a user account.");

/// Trims `value` and checks it holds at least `min` characters.
fn trimmed_with_min(value: String, min: usize) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    if trimmed.chars().count() < min {
        return Err(TypeConstraintError::TooShort { min });
    }
    Ok(trimmed.to_string())
}

macro_rules! text_newtype {
    ($name:ident, $min:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed value satisfying the minimum length.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trimmed_with_min(value.into(), $min).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

text_newtype!(
    TicketTitle,
    MIN_TITLE_LENGTH,
    "Ticket title, trimmed and at least five characters long."
);

text_newtype!(
    TicketDescription,
    MIN_DESCRIPTION_LENGTH,
    "Ticket description, trimmed and at least twenty characters long."
);

text_newtype!(
    EntityName,
    1,
    "Display name of a category or priority, trimmed and non-empty."
);
