//! # Petstore Client
//!
//! > **A Recipe for Resource-oriented HTTP Clients in Rust.**
//!
//! This crate wraps a pet-adoption REST API behind a small, type-safe client.
//! It separates the *resource contract* (which paths exist, what an id looks
//! like) from the *transport* (how bytes actually move), so the same client
//! code runs against a live server in production and a scripted mock in tests.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Generics: The Power of `R`
//! You'll see `ResourceClient<R: Resource>` everywhere. This means "I can fetch
//! *anything*, as long as it names a collection path and an id type."
//! - **Benefit**: The request construction is written **once**, and it works
//!   for pets today and any other collection tomorrow.
//! - **Trade-off**: One extra trait to learn, in exchange for never writing
//!   `format!("{}/{}", base, id)` in application code again.
//!
//! ### Dependency Injection: Testing without Pain
//! The HTTP client is never a module-level global. Every client holds an
//! `Arc<dyn Transport>` handed to it at construction time, so tests swap in a
//! [`MockTransport`](transport::MockTransport) and assert on the exact requests
//! issued. See the [`transport::mock`] module for a complete guide.
//!
//! ### Pass-through Core
//! [`ResourceClient`](clients::ResourceClient) adds nothing to the exchange: no
//! validation, no retries, no caching, no error translation. Whatever the
//! transport returns — success or failure — is what the caller receives.
//! Typed conveniences live one layer up, in [`PetClient`](clients::PetClient).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`transport`])
//! The [`Transport`](transport::Transport) trait plus its two implementations:
//! [`HttpTransport`](transport::HttpTransport) (reqwest-backed) and
//! [`MockTransport`](transport::MockTransport) (scripted, for tests).
//!
//! ### 2. The Interface ([`clients`])
//! The generic [`ResourceClient`](clients::ResourceClient) and the typed
//! [`PetClient`](clients::PetClient) built on top of it.
//!
//! ### 3. The Data ([`model`])
//! [`Pet`](model::Pet) and the [`PetQuery`](model::PetQuery) list filters.
//!
//! ### 4. The Orchestrator ([`runtime`])
//! [`PetStore`](runtime::PetStore) wires the transport into the clients, and
//! [`setup_tracing`](runtime::setup_tracing) initializes logging.
//!
//! ## 🚀 Quick Start
//!
//! ```ignore
//! use petstore_client::model::PetQuery;
//! use petstore_client::runtime::{setup_tracing, PetStore};
//!
//! setup_tracing();
//! let store = PetStore::new("https://api.example.com");
//!
//! let cats = store.pets.get_pets(PetQuery {
//!     species: Some("cat".into()),
//!     ..Default::default()
//! }).await?;
//!
//! let pet = store.pets.get_pet(42).await?;
//! ```
//!
//! Run tests with `cargo test`; set `RUST_LOG=petstore_client=debug` to watch
//! the request flow.

pub mod clients;
pub mod model;
pub mod runtime;
pub mod transport;
