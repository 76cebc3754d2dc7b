//! # Core Transport Abstraction
//!
//! This module defines the seam between resource clients and the network.
//!
//! ## Key Types
//!
//! - [`Transport`]: The trait any transport must implement.
//! - [`QueryParams`]: The opaque key/value mapping attached to list requests.
//! - [`Response`]: The untyped result of a successful exchange.
//! - [`TransportError`]: Common failures (connection, timeout, non-2xx status).

use std::fmt::{self, Display};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// The HTTP capability injected into every resource client.
///
/// # Architecture Note
/// Why a trait instead of using `reqwest::Client` directly?
/// By defining a contract (`Transport`) that both the production transport
/// ([`HttpTransport`](crate::transport::HttpTransport)) and the test transport
/// ([`MockTransport`](crate::transport::MockTransport)) satisfy, the request
/// construction in [`ResourceClient`](crate::clients::ResourceClient) is
/// written once and exercised identically in production and in tests.
///
/// Implementations must be shareable (`Send + Sync`): a single transport is
/// held behind an `Arc` and used concurrently by every client in the process.
/// Calls are independent; no ordering is guaranteed between them.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a `GET` to `path`, with `params` serialized as the query string.
    ///
    /// An empty `params` produces an empty query string. The transport owns
    /// serialization; callers pass the mapping through unmodified.
    async fn get(&self, path: &str, params: &QueryParams) -> Result<Response, TransportError>;
}

// =============================================================================
// 2. QUERY PARAMETERS
// =============================================================================

/// A primitive value usable in a query string.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(s) => write!(f, "{}", s),
            QueryValue::Int(i) => write!(f, "{}", i),
            QueryValue::Float(x) => write!(f, "{}", x),
            QueryValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Str(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Str(s)
    }
}

impl From<i64> for QueryValue {
    fn from(i: i64) -> Self {
        QueryValue::Int(i)
    }
}

impl From<u32> for QueryValue {
    fn from(i: u32) -> Self {
        QueryValue::Int(i64::from(i))
    }
}

impl From<f64> for QueryValue {
    fn from(x: f64) -> Self {
        QueryValue::Float(x)
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        QueryValue::Bool(b)
    }
}

/// An ordered mapping of query-string keys to primitive values.
///
/// The mapping is opaque to the client layer: no validation, no
/// normalization. Keys keep their insertion order so the serialized query
/// string is deterministic, which the tests rely on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, QueryValue)>,
}

impl QueryParams {
    /// Creates an empty mapping (serializes to an empty query string).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Appends a key/value pair.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, QueryValue)> {
        self.pairs.iter()
    }

    /// Lowers the mapping into string pairs for the wire.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.pairs
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }
}

// =============================================================================
// 3. RESPONSE & ERRORS
// =============================================================================

/// The untyped result of a successful exchange.
///
/// The body is opaque to the core client: status interpretation and payload
/// schema belong to the caller (or to a typed wrapper such as
/// [`PetClient`](crate::clients::PetClient)).
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A `200 OK` response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body as UTF-8 text (lossy).
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Failures a transport can surface.
///
/// Non-2xx statuses are failures at this level: the exchange completed, but
/// the server refused it. The core client never translates these; they reach
/// the caller exactly as the transport produced them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    /// The request never completed (DNS, connect, or read failure).
    #[error("connection failed: {0}")]
    Connection(String),

    /// The transport's own deadline elapsed.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-2xx status.
    #[error("server returned status {status}")]
    Status { status: u16, body: String },

    /// The base URL and path did not form a valid request URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}
