//! Ticket-tracking admin client.
//!
//! The crate keeps the list/detail/edit state of the ticket tracker in sync
//! with a conventional CRUD REST backend. The `data` feature exposes the pure
//! state layer; `client` adds the HTTP gateway and async services.

pub mod domain;
pub mod dto;
pub mod forms;
pub mod list;
pub mod models;
pub mod notifications;
pub mod pagination;
pub mod store;

#[cfg(feature = "client")]
pub mod repository;
#[cfg(feature = "client")]
pub mod services;

/// Name the backend uses as the prefix of its alert headers.
pub const DEFAULT_APP_NAME: &str = "ticketTrackerApp";
