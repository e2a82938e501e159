use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    /// The request could not complete: connection refused, timeout, reset.
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// The backend answered with a non-2xx status.
    #[error("{message} (HTTP {status})")]
    HttpError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl RepositoryError {
    /// Message suitable for a user-visible notification.
    pub fn user_message(&self) -> String {
        match self {
            RepositoryError::HttpError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RepositoryError::InvalidResponse(err.to_string())
        } else if err.is_builder() {
            RepositoryError::InvalidRequest(err.to_string())
        } else if let Some(status) = err.status() {
            RepositoryError::HttpError {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            RepositoryError::NetworkFailure(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::InvalidRequest(format!("Serialization error: {err}"))
    }
}

impl From<url::ParseError> for RepositoryError {
    fn from(err: url::ParseError) -> Self {
        RepositoryError::InvalidRequest(format!("Invalid URL: {err}"))
    }
}
