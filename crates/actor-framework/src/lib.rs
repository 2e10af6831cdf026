//! # Actor Framework
//!
//! Foundational building blocks for type-safe, concurrent resource actors.
//! It applies a **Resource-Oriented** pattern on top of the **Actor Model**:
//! each resource type gets one actor that owns its state, and every other
//! component talks to it through a typed client over a channel.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain records and their invariants
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and state ownership
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! Resources in this framework are write-once. An entity is created with the
//! identity it carries, then read back by id or listed. The actor refuses to
//! store the same id twice, which is what makes it usable as a sink for
//! records whose identity is issued elsewhere.
//!
//! ```rust
//! use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct Topping { id: String, name: String }
//!
//! #[derive(Debug, thiserror::Error)]
//! enum ToppingError {
//!     #[error("topping name must not be empty")]
//!     EmptyName,
//! }
//!
//! impl ActorEntity for Topping {
//!     type Id = String;
//!     type Create = Topping;
//!     type Error = ToppingError;
//!
//!     fn from_create_params(params: Topping) -> Result<Self, Self::Error> { Ok(params) }
//!     fn id(&self) -> &String { &self.id }
//!     fn on_create(&mut self) -> Result<(), Self::Error> {
//!         if self.name.is_empty() { Err(ToppingError::EmptyName) } else { Ok(()) }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Topping>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let egg = Topping { id: "egg".into(), name: "Ajitama".into() };
//!     client.create(egg.clone()).await.unwrap();
//!
//!     // Same id twice is rejected
//!     let again = client.create(egg).await;
//!     assert!(matches!(again, Err(FrameworkError::AlreadyExists(_))));
//!
//!     let all = client.list().await.unwrap();
//!     assert_eq!(all.len(), 1);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed)
//! - Multiple actors run in **parallel**
//! - Dropping every client closes the channel and ends the actor loop
//!
//! ## Testing
//!
//! The [`mock`] module provides [`mock::MockClient`], a scripted stand-in for
//! a running actor, plus raw channel helpers.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
