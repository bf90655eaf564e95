//! Error types for the order book.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The action answered with a result for a different action.
    #[error("Unexpected action result: {0}")]
    UnexpectedResult(String),

    /// An error occurred while communicating with the order book.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<record_actor::StoreError> for OrderError {
    fn from(e: record_actor::StoreError) -> Self {
        match e {
            record_actor::StoreError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
