pub mod assets;
pub(crate) mod health;
pub mod players;
pub mod transform;

pub use health::health_check;
