//! Domain error types shared by the service layer and the commands.

use crate::db::error::StorageError;
use thiserror::Error;

/// Input rejected before any storage call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{value}' is not a valid category. Valid options are: {options}")]
    InvalidCategory { value: String, options: String },

    #[error("'{0}' is not a valid status. Valid options are: 0 (UNDONE), 1 (DONE)")]
    InvalidStatus(i64),

    #[error("Invalid email '{email}': {reason}")]
    InvalidEmail { email: String, reason: String },

    #[error("Task name cannot be empty")]
    BlankName,

    #[error("Invalid user: {0}")]
    InvalidUser(String),
}

/// Errors returned by the task and user services.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Position {index} is out of range (valid positions: 1..={count})")]
    IndexOutOfRange { index: usize, count: usize },
}

pub type ServiceResult<T> = Result<T, ServiceError>;
