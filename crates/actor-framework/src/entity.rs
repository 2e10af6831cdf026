//! # ActorEntity Trait
//!
//! The contract every resource (broth, protein, order, ...) implements to be
//! managed by the generic [`ResourceActor`](crate::ResourceActor).
//!
//! Entities carry their own identity. The actor never invents ids: catalog
//! entries arrive with their catalog id and orders arrive with the id issued
//! by the external allocator. The actor only guarantees that an id is stored
//! at most once.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// Associated types keep each actor's payloads apart: an order store only
/// accepts order payloads and a broth catalog only accepts broth payloads.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// One error enum per actor, shared by every operation on it.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the entity from its creation payload.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    /// The identity the entity is stored under.
    fn id(&self) -> &Self::Id;

    /// Called after construction and before the entity is stored.
    ///
    /// Use this hook to enforce invariants. The default accepts everything.
    fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
