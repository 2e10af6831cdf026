use crate::allocator::AllocatorError;
use crate::catalog_actor::CatalogError;
use thiserror::Error;

/// Outcome reported to whoever asked for the order.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PlaceOrderError {
    #[error("both brothId and proteinId are required")]
    MissingParameters,
    #[error("could not place order")]
    CouldNotPlaceOrder,
}

/// Why a placement failed after validation. Logged, never returned.
#[derive(Debug, Error)]
pub enum PlacementFailure {
    #[error("order id allocation failed: {0}")]
    Allocation(#[from] AllocatorError),
    #[error("catalog lookup failed: {0}")]
    CatalogLookup(#[from] CatalogError),
    #[error("placement cancelled by caller")]
    Cancelled,
}
