//! Domain records of the ticket tracker as the backend returns them.

pub mod ticket;
pub mod ticket_category;
pub mod ticket_priority;
pub mod types;
pub mod user;
