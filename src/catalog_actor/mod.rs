//! Catalog resource actors: one for broths, one for proteins.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::{BrothClient, ProteinClient};
use crate::model::{Broth, Protein};
use actor_framework::ResourceActor;

/// Creates a new Broth actor and its client.
pub fn new_broths() -> (ResourceActor<Broth>, BrothClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, BrothClient::new(generic_client))
}

/// Creates a new Protein actor and its client.
pub fn new_proteins() -> (ResourceActor<Protein>, ProteinClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, ProteinClient::new(generic_client))
}
