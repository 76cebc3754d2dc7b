//! Type-safe clients built over the [`Transport`](crate::transport::Transport) seam.

pub mod api_client;
pub mod error;
pub mod pet_client;
pub mod resource_client;

pub use api_client::*;
pub use error::*;
pub use pet_client::*;
pub use resource_client::*;
