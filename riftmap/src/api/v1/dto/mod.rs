//! v1 API Data Transfer Objects.
//!
//! These types define the wire format for the v1 REST API and convert from
//! the service-layer results.

pub mod assets;
pub mod players;
pub mod transform;

pub use assets::*;
pub use players::*;
pub use transform::*;
