//! Error types for the Order store actor.

use thiserror::Error;

/// Errors that can occur during order store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// An order with the same allocator-issued id is already stored.
    #[error("Order already stored: {0}")]
    Duplicate(String),

    /// The order record violates its invariants.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

impl From<actor_framework::FrameworkError> for OrderError {
    fn from(e: actor_framework::FrameworkError) -> Self {
        use actor_framework::FrameworkError;
        match e {
            FrameworkError::AlreadyExists(id) => OrderError::Duplicate(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
