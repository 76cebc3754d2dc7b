//! # Mock Transport
//!
//! Utilities for testing clients without a server.
//!
//! [`MockTransport`] plays two roles:
//! - **Recorder**: every request is captured and available via
//!   [`MockTransport::requests`], so tests can assert exactly what was sent.
//! - **Script**: responses come from a queue of expectations built with
//!   [`MockTransport::expect_get`], matched by request path;
//!   [`MockTransport::verify`] fails the test if any expectation was never
//!   consumed.
//!
//! # Example
//! ```ignore
//! let mock = Arc::new(MockTransport::new());
//! mock.expect_get("/pets/42").return_ok(Response::ok(body));
//!
//! let client = ResourceClient::<Pets>::new(mock.clone());
//! // Use client in tests...
//! mock.verify(); // Ensures all expectations were met
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::transport::{QueryParams, Response, Transport, TransportError};

/// A single request observed by the mock, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub path: String,
    pub params: QueryParams,
}

/// An expected request and the scripted result to serve for it.
struct Expectation {
    path: String,
    response: Result<Response, TransportError>,
}

/// A scripted [`Transport`] with expectation tracking for fluent testing.
///
/// Each request consumes the oldest expectation whose path matches it, so
/// concurrent calls may arrive in any order. A request with no matching
/// expectation panics, failing the test immediately with the offending path.
#[derive(Default)]
pub struct MockTransport {
    expectations: Mutex<VecDeque<Expectation>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `GET` to `path`; chain `return_ok` or `return_err` to script
    /// the result.
    pub fn expect_get(&self, path: impl Into<String>) -> GetExpectationBuilder<'_> {
        GetExpectationBuilder {
            path: path.into(),
            expectations: &self.expectations,
        }
    }

    /// Everything the mock has served so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests served so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str, params: &QueryParams) -> Result<Response, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            path: path.to_string(),
            params: params.clone(),
        });

        let mut exps = self.expectations.lock().unwrap();
        let position = exps.iter().position(|exp| exp.path == path);
        match position {
            Some(i) => exps.remove(i).unwrap().response,
            None => panic!("Unexpected GET {}", path),
        }
    }
}

/// Builder for `GET` expectations.
pub struct GetExpectationBuilder<'a> {
    path: String,
    expectations: &'a Mutex<VecDeque<Expectation>>,
}

impl GetExpectationBuilder<'_> {
    /// Sets the expectation to return a successful response.
    pub fn return_ok(self, response: Response) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            path: self.path,
            response: Ok(response),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: TransportError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            path: self.path,
            response: Err(error),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_scripted_expectations_and_records_requests() {
        let mock = MockTransport::new();
        mock.expect_get("/pets").return_ok(Response::ok("[]"));
        mock.expect_get("/pets/7")
            .return_err(TransportError::Connection("refused".into()));

        let params = QueryParams::new().with("species", "cat");
        let first = mock.get("/pets", &params).await;
        assert_eq!(first, Ok(Response::ok("[]")));

        let second = mock.get("/pets/7", &QueryParams::new()).await;
        assert_eq!(second, Err(TransportError::Connection("refused".into())));

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].path, "/pets");
        assert_eq!(requests[0].params, params);
        assert_eq!(requests[1].path, "/pets/7");
        assert!(requests[1].params.is_empty());

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn verify_panics_when_expectations_remain() {
        let mock = MockTransport::new();
        mock.expect_get("/pets").return_ok(Response::ok("[]"));
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected GET /owners")]
    async fn unexpected_path_panics() {
        let mock = MockTransport::new();
        mock.expect_get("/pets").return_ok(Response::ok("[]"));
        let _ = mock.get("/owners", &QueryParams::new()).await;
    }
}
