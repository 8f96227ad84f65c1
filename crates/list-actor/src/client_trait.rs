//! # ActorClient Trait
//!
//! Common interface for resource-specific client wrappers. Provides the
//! standard operations (`get`, `delete`, `list`, `reorder`) on top of a
//! generic [`CollectionClient`], so a domain client only writes the
//! methods with resource-specific payloads.

use crate::{CollectionClient, FrameworkError, OrderedEntity};
use async_trait::async_trait;
use std::collections::HashMap;

/// Trait for resource-specific clients to inherit standard operations.
///
/// Implementors supply the inner generic client and an error mapping; the
/// provided methods handle the round trips and tracing.
///
/// # Example
///
/// ```rust,ignore
/// struct SlideClient { inner: CollectionClient<Slide> }
///
/// #[async_trait]
/// impl ActorClient<Slide> for SlideClient {
///     type Error = SlideError;
///
///     fn inner(&self) -> &CollectionClient<Slide> { &self.inner }
///     fn map_error(e: FrameworkError) -> SlideError {
///         SlideError::ActorCommunicationError(e.to_string())
///     }
/// }
///
/// // get(), delete(), list() and reorder() are provided automatically.
/// ```
#[async_trait]
pub trait ActorClient<T: OrderedEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &CollectionClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by id, subject to its destroy guard.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// All entities in position order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Apply a batch of candidate-id → desired-position pairs.
    #[tracing::instrument(skip(self, targets))]
    async fn reorder(&self, targets: HashMap<String, u32>) -> Result<(), Self::Error> {
        tracing::debug!(batch = targets.len(), "Sending request");
        self.inner().reorder(targets).await.map_err(Self::map_error)
    }
}
