pub mod api;
pub mod main;

use thiserror::Error;

use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
/// Errors surfaced by the service layer to the HTTP handlers.
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Internal(other.to_string()),
        }
    }
}
