//! # Store Errors
//!
//! Failures raised by the store plumbing itself, as opposed to a record's own
//! error type, which travels boxed inside [`StoreError::Record`].

/// Errors surfaced by [`RecordClient`](crate::RecordClient) calls.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record actor closed")]
    ActorClosed,
    #[error("Record actor dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Record id space exhausted")]
    IdsExhausted,
    #[error("Record error: {0}")]
    Record(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// True when the request reached the actor and named an id it does not hold.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
