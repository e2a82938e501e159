//! Async orchestration between the list/detail state, the forms and the
//! repository gateways. Failures of backend calls are logged, recorded in the
//! affected view and queued as notifications; they are also returned so the
//! caller can react.

use thiserror::Error;

use crate::forms::FormError;
use crate::list::ListError;
use crate::repository::errors::RepositoryError;

pub mod dashboard;
pub mod entity;
pub mod list;
pub mod named;
pub mod options;
pub mod ticket;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    List(#[from] ListError),

    #[error("Nothing to update")]
    EmptyPatch,
}

pub type ServiceResult<T> = Result<T, ServiceError>;
