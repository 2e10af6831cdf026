use crate::allocator::OrderIdAllocator;
use crate::catalog_actor::{self, CatalogError};
use crate::clients::{BrothClient, OrderClient, ProteinClient};
use crate::config::{CatalogSeed, PersistenceConfig};
use crate::http::ApiState;
use crate::persistence::{PersistenceQueue, PersistenceWorker, RetryPolicy};
use crate::placement::OrderPlacement;
use secrecy::Secret;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Owns the running store: the catalog and order actors, the persistence
/// worker, and the placement orchestrator wired on top of them.
///
/// # Example
///
/// ```ignore
/// let system = StoreSystem::new(allocator, &config.persistence, config.allocator.timeout());
/// system.seed_catalog(&config.catalog).await?;
///
/// let placed = system.placement.place_order(request, &CancellationToken::new()).await?;
///
/// system.shutdown().await?;
/// ```
pub struct StoreSystem {
    pub broth_client: BrothClient,
    pub protein_client: ProteinClient,
    pub order_client: OrderClient,
    pub persistence: PersistenceQueue,
    pub placement: OrderPlacement,

    /// Task handles for every actor and the worker
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    /// Spawns every actor and the persistence worker.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(
        allocator: Arc<dyn OrderIdAllocator>,
        persistence: &PersistenceConfig,
        allocation_timeout: Duration,
    ) -> Self {
        let (broth_actor, broth_client) = catalog_actor::new_broths();
        let (protein_actor, protein_client) = catalog_actor::new_proteins();
        let (order_actor, order_client) = crate::order_actor::new();

        let (worker, queue) = PersistenceWorker::new(
            order_client.clone(),
            RetryPolicy::from(persistence),
            persistence.queue_size,
            persistence.audit_capacity,
        );

        let handles = vec![
            tokio::spawn(broth_actor.run()),
            tokio::spawn(protein_actor.run()),
            tokio::spawn(order_actor.run()),
            tokio::spawn(worker.run()),
        ];

        let placement = OrderPlacement::new(
            allocator,
            broth_client.clone(),
            protein_client.clone(),
            queue.clone(),
            allocation_timeout,
        );

        info!("Store system started");

        Self {
            broth_client,
            protein_client,
            order_client,
            persistence: queue,
            placement,
            handles,
        }
    }

    /// Loads the configured broths and proteins into the catalog actors.
    pub async fn seed_catalog(&self, seed: &CatalogSeed) -> Result<(), CatalogError> {
        for broth in &seed.broths {
            self.broth_client.add_broth(broth.clone()).await?;
        }
        for protein in &seed.proteins {
            self.protein_client.add_protein(protein.clone()).await?;
        }
        info!(
            broths = seed.broths.len(),
            proteins = seed.proteins.len(),
            "Catalog seeded"
        );
        Ok(())
    }

    /// State for [`crate::http::router`], sharing this system's clients.
    pub fn api_state(&self, api_key: Secret<String>, image_placeholder: &str) -> ApiState {
        ApiState::new(
            self.placement.clone(),
            self.broth_client.clone(),
            self.protein_client.clone(),
            self.order_client.clone(),
            api_key,
            image_placeholder,
        )
    }

    /// Drops every client this system holds and waits for all tasks to end.
    ///
    /// Clones handed out earlier (for example inside an [`ApiState`]) keep
    /// their actors alive, so drop them first. Orders still queued for
    /// persistence are written before the worker exits.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down store system...");

        drop(self.placement);
        drop(self.persistence);
        drop(self.broth_client);
        drop(self.protein_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("Store system shutdown complete.");
        Ok(())
    }
}
