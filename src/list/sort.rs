use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Field every list sorts by until the user picks another one.
pub const DEFAULT_SORT_FIELD: &str = "id";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "asc" | "ASC" => Ok(SortOrder::Asc),
            "desc" | "DESC" => Ok(SortOrder::Desc),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// Sort column and direction, written as `field,order` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub order: SortOrder,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::ascending(DEFAULT_SORT_FIELD)
    }
}

impl SortSpec {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }

    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, SortOrder::Asc)
    }

    /// Parses `field,order`. A missing or unknown order falls back to
    /// ascending and a blank field to [`DEFAULT_SORT_FIELD`].
    pub fn parse_lenient(raw: &str) -> Self {
        let mut parts = raw.splitn(2, ',');
        let field = parts.next().map(str::trim).unwrap_or_default();
        let order = parts
            .next()
            .and_then(|order| order.parse().ok())
            .unwrap_or_default();

        if field.is_empty() {
            Self::new(DEFAULT_SORT_FIELD, order)
        } else {
            Self::new(field, order)
        }
    }

    /// Sorting by the current field flips the direction, any other field
    /// starts ascending.
    #[must_use]
    pub fn toggled(&self, field: &str) -> Self {
        if self.field == field {
            Self::new(field, self.order.flipped())
        } else {
            Self::ascending(field)
        }
    }
}

impl Display for SortSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.field, self.order)
    }
}
