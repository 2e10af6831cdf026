//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).

pub mod broth_client;
pub mod order_client;
pub mod protein_client;

pub use broth_client::*;
pub use order_client::*;
pub use protein_client::*;
