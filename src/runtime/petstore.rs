use std::sync::Arc;

use crate::clients::{PetClient, ResourceClient};
use crate::transport::{HttpTransport, Transport};

/// The wired-up client set for one API endpoint.
///
/// `PetStore` owns the decision of *which* transport backs the clients; the
/// clients themselves never construct one. That keeps the transport an
/// explicit, injected dependency rather than a module-level global, so tests
/// substitute a [`MockTransport`](crate::transport::MockTransport) through
/// [`PetStore::with_transport`] and production code uses [`PetStore::new`].
///
/// There is no lifecycle beyond construction: the clients are stateless, and
/// dropping the store drops the shared transport with it.
///
/// # Example
///
/// ```ignore
/// let store = PetStore::new("https://api.example.com");
/// let pets = store.pets.get_pets(PetQuery::default()).await?;
/// ```
pub struct PetStore {
    /// Client for the `/pets` collection.
    pub pets: PetClient,

    /// The transport shared by every client in this store.
    transport: Arc<dyn Transport>,
}

impl PetStore {
    /// Wires all clients over a reqwest transport for `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(Arc::new(HttpTransport::new(base_url)))
    }

    /// Wires all clients over a caller-supplied transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        let pets = PetClient::new(ResourceClient::new(Arc::clone(&transport)));
        Self { pets, transport }
    }

    /// The shared transport, for wiring additional resource clients.
    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::clone(&self.transport)
    }
}
