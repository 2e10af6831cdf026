//! Pure data structures shared across the store: catalog entries, orders and
//! the placement request/response pair.

pub mod catalog;
pub mod order;
pub mod placement;

pub use catalog::*;
pub use order::*;
pub use placement::*;
