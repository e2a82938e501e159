//! Data transfer objects shared between the list state and the services.

pub mod api;
pub mod dashboard;
