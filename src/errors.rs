use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the storage and configuration layers.
///
/// The analytics reducers are total functions over their inputs and never
/// produce a `CoreError`; failures can only occur while obtaining a snapshot.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, CoreError>;

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::StorageError(err.to_string())
    }
}
