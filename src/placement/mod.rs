//! # Order Placement
//!
//! Coordinates one order: validate the request, obtain an id from the
//! allocator, resolve the protein and the broth, compose the order, hand it
//! to the persistence queue and answer. The answer never waits for the
//! write.
//!
//! Every external wait races the caller's [`CancellationToken`]. Once an
//! order has been dispatched, cancelling no longer affects it.

pub mod error;

pub use error::{PlaceOrderError, PlacementFailure};

use crate::allocator::{AllocatorError, OrderIdAllocator};
use crate::clients::{BrothClient, ProteinClient};
use crate::model::{BrothId, Order, OrderId, PlaceOrderRequest, PlaceOrderResponse, ProteinId};
use crate::persistence::PersistenceQueue;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

#[derive(Clone)]
pub struct OrderPlacement {
    allocator: Arc<dyn OrderIdAllocator>,
    broths: BrothClient,
    proteins: ProteinClient,
    persistence: PersistenceQueue,
    allocation_timeout: Duration,
}

impl OrderPlacement {
    pub fn new(
        allocator: Arc<dyn OrderIdAllocator>,
        broths: BrothClient,
        proteins: ProteinClient,
        persistence: PersistenceQueue,
        allocation_timeout: Duration,
    ) -> Self {
        Self {
            allocator,
            broths,
            proteins,
            persistence,
            allocation_timeout,
        }
    }

    #[instrument(
        name = "place_order",
        skip(self, request, cancel),
        fields(protein_id = %request.protein_id, broth_id = %request.broth_id)
    )]
    pub async fn place_order(
        &self,
        request: PlaceOrderRequest,
        cancel: &CancellationToken,
    ) -> Result<PlaceOrderResponse, PlaceOrderError> {
        if request.protein_id.trim().is_empty() || request.broth_id.trim().is_empty() {
            warn!("Rejected order with missing parameters");
            return Err(PlaceOrderError::MissingParameters);
        }

        let order = self.compose(&request, cancel).await.map_err(|failure| {
            error!(error = %failure, "Could not place order");
            PlaceOrderError::CouldNotPlaceOrder
        })?;

        let response = PlaceOrderResponse {
            order_id: order.id.clone(),
            description: order.description.clone(),
            image_url: order.image_url.clone(),
        };

        if let Err(e) = self.persistence.dispatch(order) {
            error!(order_id = %response.order_id, error = %e, "Order dispatch failed");
        }

        info!(order_id = %response.order_id, "Order placed");
        Ok(response)
    }

    async fn compose(
        &self,
        request: &PlaceOrderRequest,
        cancel: &CancellationToken,
    ) -> Result<Order, PlacementFailure> {
        let order_id = cancellable(cancel, self.allocate()).await??;
        debug!(order_id = %order_id, "Order id allocated");

        let protein_id = ProteinId(request.protein_id.clone());
        let protein = cancellable(cancel, self.proteins.get_protein_by_id(&protein_id)).await??;

        let broth_id = BrothId(request.broth_id.clone());
        let broth = cancellable(cancel, self.broths.get_broth_by_id(&broth_id)).await??;

        Ok(Order::compose(order_id, &broth, &protein))
    }

    async fn allocate(&self) -> Result<OrderId, AllocatorError> {
        let allocation = self.allocator.allocate_order_id();
        match tokio::time::timeout(self.allocation_timeout, allocation).await {
            Ok(result) => result,
            Err(_) => Err(AllocatorError::TimedOut(self.allocation_timeout)),
        }
    }
}

async fn cancellable<F: Future>(
    cancel: &CancellationToken,
    future: F,
) -> Result<F::Output, PlacementFailure> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(PlacementFailure::Cancelled),
        output = future => Ok(output),
    }
}
