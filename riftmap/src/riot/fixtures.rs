//! Upstream payload builders and an in-memory source shared by unit tests.

use async_trait::async_trait;
use serde_json::json;

use crate::error::{Result, RiftmapError};
use crate::riot::{MatchDataSource, MatchId, MatchSummary, MatchTimeline, PlayerIdentity, PlayerKey};

pub(crate) const PUUID: &str = "puuid-me";

/// Summary where the player (slot 2) scored `kills` in a 30 minute game.
pub(crate) fn summary_json(puuid: &str, kills: u32) -> serde_json::Value {
    let participant = |id: &str, kills: u32| {
        json!({
            "puuid": id, "kills": kills, "deaths": 3, "assists": 7,
            "totalDamageTaken": 18000, "wardsPlaced": 12, "wardsKilled": 3,
            "visionScore": 30, "goldEarned": 12000,
            "totalMinionsKilled": 210, "neutralMinionsKilled": 30,
            "challenges": { "damagePerMinute": 650.0, "teamDamagePercentage": 0.25 }
        })
    };
    let participants: Vec<_> = (1..=10)
        .map(|s| {
            if s == 2 {
                participant(puuid, kills)
            } else {
                participant(&format!("p{s}"), 1)
            }
        })
        .collect();
    json!({
        "metadata": { "matchId": "EUW1_1" },
        "info": {
            "gameDuration": 1800,
            "gameEndTimestamp": 1_700_000_000_000i64,
            "participants": participants
        }
    })
}

/// Timeline of `frames` minutes where the player sits in slot 2 and every
/// participant has gold `500 + 400 * minute`.
pub(crate) fn timeline_json(puuid: &str, frames: usize) -> serde_json::Value {
    let participants: Vec<_> = (1..=10)
        .map(|s| {
            let id = if s == 2 { puuid.to_string() } else { format!("p{s}") };
            json!({ "participantId": s, "puuid": id })
        })
        .collect();
    let frames: Vec<_> = (0..frames)
        .map(|minute| {
            let snapshots: serde_json::Map<String, serde_json::Value> = (1..=10)
                .map(|s| {
                    (
                        s.to_string(),
                        json!({
                            "totalGold": 500 + 400 * minute,
                            "xp": 300 * minute,
                            "minionsKilled": 7 * minute,
                            "jungleMinionsKilled": 0
                        }),
                    )
                })
                .collect();
            json!({ "participantFrames": snapshots, "events": [] })
        })
        .collect();
    json!({ "info": { "frames": frames, "participants": participants } })
}

/// Serves `matches` identical 30 minute matches in which [`PUUID`] has 6
/// kills. The game name `nobody` does not resolve.
pub(crate) struct FixtureSource {
    pub matches: usize,
}

#[async_trait]
impl MatchDataSource for FixtureSource {
    async fn resolve_player(&self, identity: &PlayerIdentity) -> Result<PlayerKey> {
        if identity.game_name() == "nobody" {
            return Err(RiftmapError::PlayerNotFound(identity.to_string()));
        }
        Ok(PlayerKey(PUUID.to_string()))
    }

    async fn recent_ranked_match_ids(
        &self,
        _player: &PlayerKey,
        count: usize,
    ) -> Result<Vec<MatchId>> {
        Ok((0..self.matches.min(count))
            .map(|i| MatchId(format!("EUW1_{i}")))
            .collect())
    }

    async fn match_summary(&self, _id: &MatchId) -> Result<MatchSummary> {
        serde_json::from_value(summary_json(PUUID, 6))
            .map_err(|e| RiftmapError::upstream(Some(200), e.to_string()))
    }

    async fn match_timeline(&self, _id: &MatchId) -> Result<MatchTimeline> {
        serde_json::from_value(timeline_json(PUUID, 30))
            .map_err(|e| RiftmapError::upstream(Some(200), e.to_string()))
    }
}
