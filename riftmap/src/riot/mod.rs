mod client;
#[cfg(test)]
pub(crate) mod fixtures;
mod source;
pub mod types;

pub use client::RiotApiClient;
pub use source::{MatchDataSource, MatchId, PlayerIdentity, PlayerKey};
pub use types::{MatchSummary, MatchTimeline};
