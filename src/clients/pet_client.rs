use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::{ApiClient, PetError, Resource, ResourceClient};
use crate::model::{Pet, PetQuery};
use crate::transport::TransportError;

/// Marker for the `/pets` collection.
pub struct Pets;

impl Resource for Pets {
    const BASE_PATH: &'static str = "/pets";
    type Id = u32;
}

/// Typed client for the pets collection.
///
/// The raw, untyped operations are inherited from [`ApiClient`]; the methods
/// here additionally decode the server's JSON into [`Pet`] values and map a
/// 404 on single-item fetches to [`PetError::NotFound`].
#[derive(Clone)]
pub struct PetClient {
    inner: ResourceClient<Pets>,
}

impl PetClient {
    pub fn new(inner: ResourceClient<Pets>) -> Self {
        Self { inner }
    }

    /// Lists pets matching `query`.
    #[instrument(skip(self))]
    pub async fn get_pets(&self, query: PetQuery) -> Result<Vec<Pet>, PetError> {
        debug!("Sending request");
        let response = self.inner.list(query.into_params()).await?;
        response.json().map_err(|e| PetError::Decode(e.to_string()))
    }

    /// Fetches a single pet by id.
    #[instrument(skip(self))]
    pub async fn get_pet(&self, id: u32) -> Result<Pet, PetError> {
        debug!("Sending request");
        let response = self.inner.get(id).await.map_err(|e| match e {
            TransportError::Status { status: 404, .. } => PetError::NotFound(id.to_string()),
            other => PetError::Transport(other),
        })?;
        response.json().map_err(|e| PetError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ApiClient<Pets> for PetClient {
    type Error = PetError;

    fn inner(&self) -> &ResourceClient<Pets> {
        &self.inner
    }
}
