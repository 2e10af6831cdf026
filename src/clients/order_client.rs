//! # Order Client
//!
//! Typed access to the order store actor. The persistence worker writes
//! through [`OrderClient::store_order`]; the HTTP layer reads placed orders
//! back with [`OrderClient::get_order`].
use crate::model::{Order, OrderId};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Order store actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}

impl OrderClient {
    /// Writes a composed order. A second write with the same id fails with
    /// [`OrderError::Duplicate`].
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn store_order(&self, order: Order) -> Result<OrderId, OrderError> {
        debug!(?order, "store_order called");
        self.inner.create(order).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: &OrderId) -> Result<Order, OrderError> {
        self.get(id.clone())
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list().await
    }
}
