//! Response bodies that are not a post or a list of posts.

use serde::{Deserialize, Serialize};

/// Error body: `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn invalid_input() -> Self {
        Self::new("Invalid input")
    }

    pub fn invalid_query() -> Self {
        Self::new("Invalid query string")
    }

    pub fn not_found() -> Self {
        Self::new("Post not found")
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}

/// Status message body: `{"message": "<text>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn post_updated(id: u64) -> Self {
        Self::new(format!("Post with id {id} has been updated successfully."))
    }

    pub fn post_deleted(id: u64) -> Self {
        Self::new(format!("Post with id {id} has been deleted successfully."))
    }
}
