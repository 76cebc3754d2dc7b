use async_trait::async_trait;

use crate::clients::{Resource, ResourceClient};
use crate::transport::{QueryParams, Response, TransportError};

/// Trait for resource-specific clients to inherit the raw read operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// the untyped `fetch` and `fetch_all` operations, mapped into each client's
/// own error type.
#[async_trait]
pub trait ApiClient<R: Resource>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<TransportError> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<R>;

    /// Fetch the raw collection response.
    #[tracing::instrument(skip(self))]
    async fn fetch_all(&self, params: QueryParams) -> Result<Response, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(params).await.map_err(Self::Error::from)
    }

    /// Fetch a raw single-item response by id.
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, id: R::Id) -> Result<Response, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::Error::from)
    }
}
