mod aggregate;
mod match_stats;
pub mod schema;
mod timeline;

pub use aggregate::mean_features;
pub use match_stats::match_features;
pub use schema::{feature_names, FeatureVector, CHECKPOINT_MINUTES, MATCH_WINDOW};
pub use timeline::{lane_opponent_slot, timeline_features};

use crate::error::Result;
use crate::riot::{MatchSummary, MatchTimeline, PlayerKey};

/// Full per-match vector: match-level rates merged with timeline checkpoints.
pub fn extract_match(
    summary: &MatchSummary,
    timeline: &MatchTimeline,
    player: &PlayerKey,
) -> Result<FeatureVector> {
    let mut features = match_features(summary, player)?;
    features.merge(timeline_features(timeline, player)?);
    Ok(features)
}
