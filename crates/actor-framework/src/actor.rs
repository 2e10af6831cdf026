//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns the state
//! of one kind of entity. It implements the "Server" side of the Actor Model,
//! processing messages sequentially and ensuring exclusive access to its store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`)
/// and the receiver end of the channel. Each actor runs in its own Tokio task
/// and handles one message at a time, so the store needs no `Mutex`.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Use**: Clone the client freely; dropping every clone stops the actor.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)]
/// struct Topping { id: String, name: String }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("invalid topping")]
/// struct ToppingError;
///
/// impl ActorEntity for Topping {
///     type Id = String;
///     type Create = Topping;
///     type Error = ToppingError;
///
///     fn from_create_params(params: Topping) -> Result<Self, Self::Error> { Ok(params) }
///     fn id(&self) -> &String { &self.id }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Topping>::new(10);
///     tokio::spawn(actor.run());
///
///     let id = client
///         .create(Topping { id: "nori".into(), name: "Nori".into() })
///         .await
///         .unwrap();
///     assert_eq!(id, "nori");
/// }
/// ```
///
/// # Operations
///
/// * **Create**: builds the entity, runs `on_create`, rejects an id that is
///   already stored with [`FrameworkError::AlreadyExists`], then stores it.
/// * **Get**: returns a clone of the entity if found, or `None`.
/// * **List**: returns clones of every entity in insertion order.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    insertion_order: Vec<T::Id>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. When the channel is
    /// full, client calls wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            insertion_order: Vec::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Broth" instead of "ramen_store::model::catalog::Broth")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let _ = respond_to.send(self.insert(entity_type, params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self
                        .insertion_order
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn insert(&mut self, entity_type: &str, params: T::Create) -> Result<T::Id, FrameworkError> {
        let mut item = T::from_create_params(params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::EntityError(Box::new(e))
        })?;

        if let Err(e) = item.on_create() {
            warn!(entity_type, error = %e, "on_create failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }

        let id = item.id().clone();
        if self.store.contains_key(&id) {
            warn!(entity_type, %id, "Already exists");
            return Err(FrameworkError::AlreadyExists(id.to_string()));
        }

        self.store.insert(id.clone(), item);
        self.insertion_order.push(id.clone());
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }
}
