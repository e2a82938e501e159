use serde::{Deserialize, Serialize};

use crate::domain::types::UserId;

/// Account reference exposed by `/api/users`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub login: String,
}
