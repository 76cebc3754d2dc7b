//! The HTTP transport seam.
//!
//! This module provides the core building blocks for issuing requests without
//! tying client code to a concrete HTTP library.
//!
//! # Main Components
//!
//! - [`Transport`] - Trait that every transport implements (one capability: `get`)
//! - [`QueryParams`] - Key/value data serialized into a request's query string
//! - [`Response`] - Opaque status + body pair returned by a transport
//! - [`TransportError`] - Failures a transport can surface (connection, timeout, status)
//! - [`HttpTransport`] - The reqwest-backed production transport
//!
//! # Testing
//!
//! See the [`mock`] module for utilities to script a transport without a server.

pub mod core;
pub mod http;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
pub use http::HttpTransport;
pub use mock::MockTransport;
