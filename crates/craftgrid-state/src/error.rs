//! Error types for the craftgrid job store.

use thiserror::Error;

/// Result type alias for job store operations.
pub type StateResult<T> = Result<T, StateError>;

/// Errors that can occur while loading or changing the job store.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("seed data I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to encode seed data: {0}")]
    Encode(String),

    #[error("job already exists: {0}")]
    Duplicate(String),
}
