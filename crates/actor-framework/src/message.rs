//! # Generic Messages
//!
//! The messages exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a [`ResourceActor`](crate::ResourceActor).
///
/// Resources managed here are write-once: they are created with the identity
/// they carry and then only read back, either one at a time or as a listing.
///
/// - **Create**: builds the entity from [`ActorEntity::Create`] and stores it under [`ActorEntity::id`].
/// - **Get**: fetches a single entity by id.
/// - **List**: returns every stored entity in insertion order.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}
