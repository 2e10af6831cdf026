//! Order identifier allocation.
//!
//! Order ids are issued by an external service. The placement orchestrator
//! only sees the [`OrderIdAllocator`] trait, so tests substitute a fake.

pub mod error;
pub mod http;

pub use error::AllocatorError;
pub use http::HttpOrderIdAllocator;

use crate::model::OrderId;
use async_trait::async_trait;

/// Source of globally unique order ids.
#[async_trait]
pub trait OrderIdAllocator: Send + Sync {
    /// Requests one fresh id. Implementations make a single attempt.
    async fn allocate_order_id(&self) -> Result<OrderId, AllocatorError>;
}
