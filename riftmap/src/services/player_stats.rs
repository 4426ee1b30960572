use std::sync::Arc;

use futures::future::join_all;

use crate::error::{Result, RiftmapError};
use crate::features::{extract_match, mean_features, FeatureVector, MATCH_WINDOW};
use crate::riot::{MatchDataSource, MatchId, MatchSummary, MatchTimeline, PlayerIdentity, PlayerKey};

/// Outcome of aggregating a player's recent match window.
#[derive(Debug, Clone)]
pub struct PlayerAverages {
    pub player: PlayerKey,
    /// `None` when the player has no ranked matches in the window.
    pub features: Option<FeatureVector>,
    pub matches_analyzed: usize,
    pub matches_failed: usize,
}

impl PlayerAverages {
    fn no_matches(player: PlayerKey) -> Self {
        Self {
            player,
            features: None,
            matches_analyzed: 0,
            matches_failed: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_none()
    }
}

/// Resolves a player, fetches their recent ranked matches concurrently and
/// averages the per-match feature vectors.
#[derive(Clone)]
pub struct PlayerStatsService {
    source: Arc<dyn MatchDataSource>,
}

impl PlayerStatsService {
    pub fn new(source: Arc<dyn MatchDataSource>) -> Self {
        Self { source }
    }

    pub async fn player_averages(&self, identity: &PlayerIdentity) -> Result<PlayerAverages> {
        let player = self.source.resolve_player(identity).await?;
        let match_ids = self
            .source
            .recent_ranked_match_ids(&player, MATCH_WINDOW)
            .await?;

        tracing::debug!(
            player = %identity,
            matches = match_ids.len(),
            "Resolved recent ranked matches"
        );

        if match_ids.is_empty() {
            return Ok(PlayerAverages::no_matches(player));
        }

        let fetched = join_all(match_ids.iter().map(|id| self.fetch_match(id))).await;

        let mut vectors = Vec::with_capacity(match_ids.len());
        let mut failed = 0;
        for (id, outcome) in match_ids.iter().zip(fetched) {
            match outcome {
                // A fetched record without the player aborts the whole request.
                Ok((summary, timeline)) => {
                    vectors.push(extract_match(&summary, &timeline, &player)?);
                }
                Err(e) => {
                    tracing::warn!(match_id = %id, error = %e, "Skipping match that failed to fetch");
                    failed += 1;
                }
            }
        }

        if vectors.is_empty() {
            return Err(RiftmapError::NoMatchData {
                attempted: match_ids.len(),
            });
        }

        tracing::debug!(
            player = %identity,
            analyzed = vectors.len(),
            failed,
            "Aggregated match window"
        );

        Ok(PlayerAverages {
            player,
            features: Some(mean_features(&vectors)),
            matches_analyzed: vectors.len(),
            matches_failed: failed,
        })
    }

    async fn fetch_match(&self, id: &MatchId) -> Result<(MatchSummary, MatchTimeline)> {
        let (summary, timeline) = tokio::join!(
            self.source.match_summary(id),
            self.source.match_timeline(id)
        );
        Ok((summary?, timeline?))
    }
}
