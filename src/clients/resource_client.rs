//! The generic resource client.
//!
//! ## Key Types
//!
//! - [`Resource`]: The trait that names a collection and its id type.
//! - [`ResourceClient`]: The generic read client over a [`Transport`].

use std::fmt::{Debug, Display};
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::transport::{QueryParams, Response, Transport, TransportError};

/// A server-side collection addressable by id.
///
/// # Architecture Note
/// By defining a contract (`Resource`) that each collection satisfies, the
/// request construction in [`ResourceClient`] is written *once* and reused for
/// every collection the API serves. The associated `Id` type keeps call sites
/// honest: you can't fetch a pet with some other resource's identifier type.
pub trait Resource: Send + Sync + 'static {
    /// The collection path on the server (e.g. `/pets`).
    const BASE_PATH: &'static str;

    /// The identifier type interpolated into `BASE_PATH/{id}`.
    type Id: Display + Debug + Send + Sync;
}

/// A stateless read client for one [`Resource`] collection.
///
/// Each call is a single, independent request/response exchange; there is no
/// internal state, no ordering between concurrent calls, and no error
/// handling beyond what the transport itself provides. The transport's result
/// — success or failure — is returned to the caller unchanged.
pub struct ResourceClient<R: Resource> {
    transport: Arc<dyn Transport>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceClient<R> {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            _resource: PhantomData,
        }
    }

    /// Fetch the collection, with `params` attached as the query string.
    ///
    /// An empty `params` yields a request with an empty query string.
    #[instrument(skip(self), fields(path = R::BASE_PATH))]
    pub async fn list(&self, params: QueryParams) -> Result<Response, TransportError> {
        debug!("Sending request");
        self.transport.get(R::BASE_PATH, &params).await
    }

    /// Fetch a single item by id.
    ///
    /// The id is substituted into the path verbatim, with no escaping; ids
    /// containing `/` will change which route the server sees. That matches
    /// the server contract this client targets.
    #[instrument(skip(self), fields(path = R::BASE_PATH))]
    pub async fn get(&self, id: R::Id) -> Result<Response, TransportError> {
        debug!("Sending request");
        let path = format!("{}/{}", R::BASE_PATH, id);
        self.transport.get(&path, &QueryParams::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;

    struct Widgets;

    impl Resource for Widgets {
        const BASE_PATH: &'static str = "/widgets";
        type Id = String;
    }

    fn client_with_mock() -> (Arc<MockTransport>, ResourceClient<Widgets>) {
        let mock = Arc::new(MockTransport::new());
        let client = ResourceClient::<Widgets>::new(mock.clone());
        (mock, client)
    }

    #[tokio::test]
    async fn list_issues_one_get_to_the_collection_path() {
        let (mock, client) = client_with_mock();
        mock.expect_get("/widgets").return_ok(Response::ok("[]"));

        let params = QueryParams::new().with("color", "blue");
        client.list(params.clone()).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 1, "exactly one request expected");
        assert_eq!(requests[0].path, "/widgets");
        assert_eq!(requests[0].params, params);
        mock.verify();
    }

    #[tokio::test]
    async fn list_with_empty_params_sends_empty_query() {
        let (mock, client) = client_with_mock();
        mock.expect_get("/widgets").return_ok(Response::ok("[]"));

        client.list(QueryParams::new()).await.unwrap();

        assert!(mock.requests()[0].params.is_empty());
    }

    #[tokio::test]
    async fn get_interpolates_the_id_into_the_path() {
        let (mock, client) = client_with_mock();
        mock.expect_get("/widgets/42").return_ok(Response::ok("{}"));

        client.get("42".to_string()).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/widgets/42");
        assert!(requests[0].params.is_empty());
    }

    #[tokio::test]
    async fn get_does_not_escape_the_id() {
        // Pins the intentional behavior: ids pass through verbatim, so a
        // slash lands in the path and addresses a different route.
        let (mock, client) = client_with_mock();
        mock.expect_get("/widgets/a/b").return_ok(Response::ok("{}"));

        client.get("a/b".to_string()).await.unwrap();

        assert_eq!(mock.requests()[0].path, "/widgets/a/b");
    }

    #[tokio::test]
    async fn results_pass_through_unchanged() {
        let (mock, client) = client_with_mock();
        let body = Response::new(201, "payload");
        mock.expect_get("/widgets").return_ok(body.clone());

        let ok = client.list(QueryParams::new()).await.unwrap();
        assert_eq!(ok, body);

        let error = TransportError::Connection("refused".into());
        mock.expect_get("/widgets/1").return_err(error.clone());

        let err = client.get("1".to_string()).await.unwrap_err();
        assert_eq!(err, error);
    }
}
