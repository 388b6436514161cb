//! Storage gateway error type.

use std::path::PathBuf;
use thiserror::Error;

/// Every failure of the underlying engine surfaces as one of these variants.
///
/// All variants keep the original engine message so callers can log it or
/// show it to the user without depending on `rusqlite` themselves.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The store file could not be opened or its directory created.
    #[error("Failed to connect to the database {path}: {message}")]
    Connection { path: PathBuf, message: String },

    /// The schema script was missing or failed to execute.
    #[error("Database initialization failed: {0}")]
    Initialization(String),

    /// A table or column name is not a plain identifier.
    #[error("Invalid identifier '{0}'")]
    InvalidIdentifier(String),

    /// A statement was rejected by the engine.
    #[error("{operation} operation failed: {message}")]
    Operation { operation: &'static str, message: String },

    /// A stored value does not map onto the requested type.
    #[error("Column '{column}' could not be decoded: {message}")]
    Decode { column: String, message: String },
}

impl StorageError {
    pub fn operation(operation: &'static str, err: rusqlite::Error) -> Self {
        Self::Operation {
            operation,
            message: err.to_string(),
        }
    }

    pub fn decode(column: impl Into<String>, message: impl ToString) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.to_string(),
        }
    }
}

/// Result type for storage gateway operations.
pub type StorageResult<T> = Result<T, StorageError>;
