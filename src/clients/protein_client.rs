//! # Protein Client
//!
//! Catalog lookups for proteins, wrapping a `ResourceClient<Protein>`.
use crate::catalog_actor::CatalogError;
use crate::model::{Protein, ProteinId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Protein actor.
#[derive(Clone)]
pub struct ProteinClient {
    inner: ResourceClient<Protein>,
}

impl ProteinClient {
    pub fn new(inner: ResourceClient<Protein>) -> Self {
        Self { inner }
    }
}

impl ActorClient<Protein> for ProteinClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Protein> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::from(e)
    }
}

impl ProteinClient {
    #[instrument(skip(self, protein), fields(protein_id = %protein.id))]
    pub async fn add_protein(&self, protein: Protein) -> Result<ProteinId, CatalogError> {
        debug!("Seeding protein");
        self.inner.create(protein).await.map_err(Self::map_error)
    }

    /// Resolve a protein reference, failing with [`CatalogError::ProteinNotFound`] when absent.
    #[instrument(skip(self))]
    pub async fn get_protein_by_id(&self, id: &ProteinId) -> Result<Protein, CatalogError> {
        self.get(id.clone())
            .await?
            .ok_or_else(|| CatalogError::ProteinNotFound(id.to_string()))
    }

    pub async fn list_proteins(&self) -> Result<Vec<Protein>, CatalogError> {
        self.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_get};

    #[tokio::test]
    async fn test_get_protein_by_id_returns_entry() {
        let (client, mut receiver) = create_mock_client::<Protein>(10);
        let protein_client = ProteinClient::new(client);

        let lookup =
            tokio::spawn(async move { protein_client.get_protein_by_id(&ProteinId::from("p1")).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, ProteinId::from("p1"));
        responder.send(Ok(Some(Protein::new("p1", "Chasu")))).unwrap();

        let protein = lookup.await.unwrap().unwrap();
        assert_eq!(protein.name, "Chasu");
    }

    #[tokio::test]
    async fn test_missing_protein_is_not_found() {
        let (client, mut receiver) = create_mock_client::<Protein>(10);
        let protein_client = ProteinClient::new(client);

        let lookup =
            tokio::spawn(async move { protein_client.get_protein_by_id(&ProteinId::from("p9")).await });

        let (_, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        responder.send(Ok(None)).unwrap();

        let result = lookup.await.unwrap();
        assert_eq!(result, Err(CatalogError::ProteinNotFound("p9".to_string())));
    }

    #[tokio::test]
    async fn test_closed_actor_maps_to_communication_error() {
        let (client, receiver) = create_mock_client::<Protein>(10);
        drop(receiver);
        let protein_client = ProteinClient::new(client);

        let result = protein_client.get_protein_by_id(&ProteinId::from("p1")).await;
        assert!(matches!(result, Err(CatalogError::ActorCommunicationError(_))));
    }
}
