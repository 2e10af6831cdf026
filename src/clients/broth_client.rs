//! # Broth Client
//!
//! Catalog lookups for broths, wrapping a `ResourceClient<Broth>`.
use crate::catalog_actor::CatalogError;
use crate::model::{Broth, BrothId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Broth actor.
#[derive(Clone)]
pub struct BrothClient {
    inner: ResourceClient<Broth>,
}

impl BrothClient {
    pub fn new(inner: ResourceClient<Broth>) -> Self {
        Self { inner }
    }
}

impl ActorClient<Broth> for BrothClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Broth> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::from(e)
    }
}

impl BrothClient {
    #[instrument(skip(self, broth), fields(broth_id = %broth.id))]
    pub async fn add_broth(&self, broth: Broth) -> Result<BrothId, CatalogError> {
        debug!("Seeding broth");
        self.inner.create(broth).await.map_err(Self::map_error)
    }

    /// Resolve a broth reference, failing with [`CatalogError::BrothNotFound`] when absent.
    #[instrument(skip(self))]
    pub async fn get_broth_by_id(&self, id: &BrothId) -> Result<Broth, CatalogError> {
        self.get(id.clone())
            .await?
            .ok_or_else(|| CatalogError::BrothNotFound(id.to_string()))
    }

    pub async fn list_broths(&self) -> Result<Vec<Broth>, CatalogError> {
        self.list().await
    }
}
