use crate::order_actor::OrderError;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while handing an order to the store.
///
/// None of these reach the placement caller; they are logged and kept in the
/// audit trail, both for writes that ultimately fail and for orders that
/// could not be queued.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PersistenceError {
    /// The store refused the record. Retrying cannot help.
    #[error("order rejected by store: {0}")]
    Rejected(String),

    /// A record with the same id is already stored.
    #[error("order already stored: {0}")]
    Duplicate(String),

    #[error("order store unavailable: {0}")]
    Unavailable(String),

    #[error("order write exceeded {0:?}")]
    TimedOut(Duration),

    #[error("persistence queue is full")]
    QueueFull,

    #[error("persistence queue is closed")]
    QueueClosed,
}

impl PersistenceError {
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PersistenceError::Unavailable(_) | PersistenceError::TimedOut(_)
        )
    }
}

impl From<OrderError> for PersistenceError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::Duplicate(id) => PersistenceError::Duplicate(id),
            OrderError::ValidationError(msg) | OrderError::NotFound(msg) => {
                PersistenceError::Rejected(msg)
            }
            OrderError::ActorCommunicationError(msg) => PersistenceError::Unavailable(msg),
        }
    }
}
