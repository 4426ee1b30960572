use crate::error::Result;
use crate::features::FeatureVector;
use crate::projection::{Coordinates, LazyArtifact, Projector};
use crate::riot::{PlayerIdentity, PlayerKey};
use crate::services::PlayerStatsService;

#[derive(Debug, Clone)]
pub struct PlayerAnalysis {
    pub player: PlayerKey,
    /// `None` when the player has no ranked matches to analyze.
    pub coordinates: Option<Coordinates>,
    pub matches_analyzed: usize,
    pub matches_failed: usize,
}

/// Places a player in the embedding space from their recent match window.
#[derive(Clone)]
pub struct AnalysisService {
    stats: PlayerStatsService,
    projector: LazyArtifact<dyn Projector>,
}

impl AnalysisService {
    pub fn new(stats: PlayerStatsService, projector: LazyArtifact<dyn Projector>) -> Self {
        Self { stats, projector }
    }

    pub async fn analyze(&self, identity: &PlayerIdentity) -> Result<PlayerAnalysis> {
        // Resolve the model first so a broken artifact fails before any upstream traffic.
        let projector = self.projector.get().await?;
        let averages = self.stats.player_averages(identity).await?;

        let coordinates = averages
            .features
            .as_ref()
            .map(|features| projector.transform(features))
            .transpose()?;

        Ok(PlayerAnalysis {
            player: averages.player,
            coordinates,
            matches_analyzed: averages.matches_analyzed,
            matches_failed: averages.matches_failed,
        })
    }

    /// Projects a caller-supplied feature vector.
    pub async fn transform(&self, features: &FeatureVector) -> Result<Coordinates> {
        let projector = self.projector.get().await?;
        projector.transform(features)
    }
}
