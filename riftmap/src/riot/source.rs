use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RiftmapError};
use crate::riot::types::{MatchSummary, MatchTimeline};

/// Human-readable two-part handle (`gameName#tagLine`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerIdentity {
    game_name: String,
    tag_line: String,
}

impl PlayerIdentity {
    /// Builds an identity from raw user input, trimming surrounding whitespace.
    pub fn new(game_name: &str, tag_line: &str) -> Result<Self> {
        let game_name = game_name.trim();
        let tag_line = tag_line.trim();

        if game_name.is_empty() {
            return Err(RiftmapError::Validation(
                "gameName cannot be empty".to_string(),
            ));
        }
        if tag_line.is_empty() {
            return Err(RiftmapError::Validation("tagLine cannot be empty".to_string()));
        }

        Ok(Self {
            game_name: game_name.to_string(),
            tag_line: tag_line.to_string(),
        })
    }

    pub fn game_name(&self) -> &str {
        &self.game_name
    }

    pub fn tag_line(&self) -> &str {
        &self.tag_line
    }
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

/// Opaque stable player identifier (the upstream `puuid`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerKey(pub String);

impl PlayerKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identifier of one completed match, e.g. `EUW1_6912345678`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(pub String);

impl MatchId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only access to the external match-data API.
///
/// Every method is an independent network call; implementations must bound
/// each call with a timeout so that an unresponsive upstream surfaces as an
/// error instead of hanging the request.
#[async_trait]
pub trait MatchDataSource: Send + Sync {
    /// Resolves a display handle to a stable key. Unknown handles return
    /// [`RiftmapError::PlayerNotFound`].
    async fn resolve_player(&self, identity: &PlayerIdentity) -> Result<PlayerKey>;

    /// Most recent ranked match ids for `player`, most-recent-first, at most `count`.
    async fn recent_ranked_match_ids(&self, player: &PlayerKey, count: usize)
        -> Result<Vec<MatchId>>;

    async fn match_summary(&self, match_id: &MatchId) -> Result<MatchSummary>;

    async fn match_timeline(&self, match_id: &MatchId) -> Result<MatchTimeline>;
}
