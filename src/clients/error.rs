//! Error types for the typed pet client.

use thiserror::Error;

use crate::transport::TransportError;

/// Errors that can occur during typed pet operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PetError {
    /// The requested pet was not found.
    #[error("Pet not found: {0}")]
    NotFound(String),

    /// The server's payload did not match the expected pet schema.
    #[error("Malformed pet payload: {0}")]
    Decode(String),

    /// The underlying transport failed.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}
