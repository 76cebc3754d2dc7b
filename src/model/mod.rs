//! Pure data structures (DTOs) for the resources served by the API.

pub mod pet;

pub use pet::*;
