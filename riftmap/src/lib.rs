//! Riftmap: aggregates a player's recent ranked matches into a fixed feature
//! vector and projects it into the embedding space of professional players.

pub mod api;
pub mod config;
pub mod error;
pub mod features;
pub mod projection;
pub mod riot;
pub mod services;

pub use error::{Result, RiftmapError};
