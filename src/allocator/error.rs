use std::time::Duration;
use thiserror::Error;

/// Errors returned by an [`OrderIdAllocator`](super::OrderIdAllocator).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AllocatorError {
    /// The request never produced a response.
    #[error("allocator transport error: {0}")]
    Transport(String),

    /// The allocator answered with a non-success status.
    #[error("allocator responded with status {0}")]
    Status(u16),

    /// The body was not `{"orderId": "<non-empty string>"}`.
    #[error("allocator response malformed: {0}")]
    Malformed(String),

    #[error("allocator did not answer within {0:?}")]
    TimedOut(Duration),
}
