//! # Ramen Store
//!
//! Order placement for a ramen storefront. Customers list broths and
//! proteins, then place an order pairing one of each.
//!
//! ## Components
//!
//! - **[model]**: catalog entries, orders, placement request/response.
//! - **[catalog_actor]** / **[order_actor]**: resource actors built on
//!   [`actor_framework`] that own the catalog and the stored orders.
//! - **[clients]**: typed wrappers around the actor clients.
//! - **[allocator]**: obtains order ids from the remote id service.
//! - **[placement]**: the orchestrator that validates, allocates, resolves
//!   and composes an order.
//! - **[persistence]**: background writer with bounded retries and an
//!   audit trail of failed writes.
//! - **[http]**: axum routes gated by `x-api-key`.
//! - **[config]** / **[lifecycle]**: startup wiring.
//!
//! ## Testing
//!
//! See [`actor_framework::mock`] for utilities to test clients without
//! spawning actors, and the [`allocator::OrderIdAllocator`] and
//! [`persistence::OrderSink`] traits for substituting the outer edges.

pub mod allocator;
pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod persistence;
pub mod placement;
