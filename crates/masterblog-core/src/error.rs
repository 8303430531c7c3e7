//! Domain-level error types.

use thiserror::Error;

/// Domain errors - failures of a post operation.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    InvalidParameter(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Post with id {id} not found")]
    NotFound { id: u64 },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DomainError {
    /// The generic rejection used for create/update bodies.
    pub fn invalid_input() -> Self {
        DomainError::InvalidInput("Invalid input".to_string())
    }
}

/// Record store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Stored posts are malformed: {0}")]
    Malformed(String),
}
