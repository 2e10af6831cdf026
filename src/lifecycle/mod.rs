//! Process wiring: tracing setup and the [`StoreSystem`] that owns every
//! running actor and worker.

pub mod store_system;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use store_system::StoreSystem;
