//! # Order Persistence
//!
//! Placed orders are written in the background. The placement orchestrator
//! pushes each order onto a [`PersistenceQueue`] and returns immediately; a
//! [`PersistenceWorker`] drains the queue into an [`OrderSink`], retrying
//! transient failures and recording the writes it finally gives up on.

pub mod error;
pub mod worker;

pub use error::PersistenceError;
pub use worker::{FailedWrite, PersistenceQueue, PersistenceRequest, PersistenceWorker, RetryPolicy};

use crate::clients::OrderClient;
use crate::model::Order;
use async_trait::async_trait;

/// Durable destination for placed orders.
#[async_trait]
pub trait OrderSink: Send + Sync + 'static {
    async fn store(&self, order: Order) -> Result<(), PersistenceError>;
}

#[async_trait]
impl OrderSink for OrderClient {
    async fn store(&self, order: Order) -> Result<(), PersistenceError> {
        self.store_order(order)
            .await
            .map(|_| ())
            .map_err(PersistenceError::from)
    }
}
