//! Player analysis request/response DTOs for the v1 API.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::features::FeatureVector;
use crate::riot::{PlayerIdentity, PlayerKey};
use crate::services::{PlayerAnalysis, PlayerAverages};

/// Query parameters for `GET /v1/analyze` and `GET /v1/stats`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PlayerQuery {
    /// Display name, e.g. `Hide on bush`.
    pub game_name: Option<String>,
    /// Tag after the `#`, e.g. `KR1`.
    pub tag_line: Option<String>,
}

impl PlayerQuery {
    pub fn identity(&self) -> Result<PlayerIdentity> {
        PlayerIdentity::new(
            self.game_name.as_deref().unwrap_or_default(),
            self.tag_line.as_deref().unwrap_or_default(),
        )
    }
}

/// The resolved player.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRef {
    pub game_name: String,
    pub tag_line: String,
    /// Stable upstream identifier.
    pub puuid: String,
}

impl PlayerRef {
    fn new(identity: &PlayerIdentity, key: &PlayerKey) -> Self {
        Self {
            game_name: identity.game_name().to_string(),
            tag_line: identity.tag_line().to_string(),
            puuid: key.to_string(),
        }
    }
}

/// Response for `GET /v1/analyze`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub player: PlayerRef,
    /// Position in the embedding space, `null` when there were no ranked
    /// matches to analyze.
    pub coordinates: Option<Vec<f64>>,
    pub matches_analyzed: usize,
    /// Matches skipped because a fetch failed.
    pub matches_failed: usize,
}

impl AnalyzeResponse {
    pub fn new(identity: &PlayerIdentity, analysis: PlayerAnalysis) -> Self {
        Self {
            player: PlayerRef::new(identity, &analysis.player),
            coordinates: analysis.coordinates,
            matches_analyzed: analysis.matches_analyzed,
            matches_failed: analysis.matches_failed,
        }
    }
}

/// Response for `GET /v1/stats`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub player: PlayerRef,
    /// Feature name to mean value. Checkpoints no match reached are `null`.
    #[schema(value_type = Object)]
    pub averages: Option<FeatureVector>,
    pub matches_analyzed: usize,
    pub matches_failed: usize,
}

impl StatsResponse {
    pub fn new(identity: &PlayerIdentity, averages: PlayerAverages) -> Self {
        Self {
            player: PlayerRef::new(identity, &averages.player),
            averages: averages.features,
            matches_analyzed: averages.matches_analyzed,
            matches_failed: averages.matches_failed,
        }
    }
}
