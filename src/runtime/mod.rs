//! Runtime wiring and observability setup.
//!
//! # Main Components
//!
//! - [`PetStore`] - Constructs the shared transport and wires the typed clients
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod petstore;
pub mod tracing;

pub use petstore::*;
pub use tracing::*;
