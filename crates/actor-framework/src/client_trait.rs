//! # ActorClient Trait
//!
//! Common interface for resource-specific clients, adding default `get` and
//! `list` methods on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
///
/// #[derive(Clone, Debug)]
/// struct Topping { id: u32 }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct ToppingError(String);
///
/// impl From<String> for ToppingError {
///     fn from(s: String) -> Self { ToppingError(s) }
/// }
///
/// impl ActorEntity for Topping {
///     type Id = u32;
///     type Create = Topping;
///     type Error = ToppingError;
///     fn from_create_params(params: Topping) -> Result<Self, Self::Error> { Ok(params) }
///     fn id(&self) -> &u32 { &self.id }
/// }
///
/// struct ToppingClient {
///     inner: ResourceClient<Topping>,
/// }
///
/// impl ActorClient<Topping> for ToppingClient {
///     type Error = ToppingError;
///
///     fn inner(&self) -> &ResourceClient<Topping> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         ToppingError(e.to_string())
///     }
/// }
///
/// async fn usage(client: ToppingClient) {
///     // get() and list() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.list().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
