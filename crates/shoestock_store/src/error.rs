//! Error types for the inventory store.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during inventory operations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Inventory file not found: {0}")]
    NotFound(PathBuf),

    #[error("Inventory file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("Malformed inventory line {line}: {message}")]
    MalformedLine { line: usize, message: String },

    #[error("No shoe with code: {0}")]
    ShoeNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
