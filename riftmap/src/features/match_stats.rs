use crate::error::{Result, RiftmapError};
use crate::features::schema::*;
use crate::riot::types::MatchSummary;
use crate::riot::PlayerKey;

/// Match-level rate features for `player`.
///
/// Counts are divided by the game length in minutes; `dpm` and
/// `damageshare` are taken as-is from the upstream challenge block.
pub fn match_features(summary: &MatchSummary, player: &PlayerKey) -> Result<FeatureVector> {
    let stats = summary
        .info
        .participants
        .iter()
        .find(|p| p.puuid == player.as_str())
        .ok_or_else(|| {
            RiftmapError::Extraction(format!(
                "Player {player} not found in match participants"
            ))
        })?;

    let minutes = summary.info.duration_minutes();
    if minutes <= 0.0 {
        return Err(RiftmapError::Extraction(format!(
            "Non-positive game duration: {}",
            summary.info.game_duration
        )));
    }
    let per_minute = |count: f64| count / minutes;

    let mut features = FeatureVector::new();
    features.set(KILLS, stats.kills as f64);
    features.set(DEATHS, stats.deaths as f64);
    features.set(ASSISTS, stats.assists as f64);
    features.set(DAMAGE_PER_MINUTE, stats.challenges.damage_per_minute);
    features.set(DAMAGE_SHARE, stats.challenges.team_damage_percentage);
    features.set(
        DAMAGE_TAKEN_PER_MINUTE,
        per_minute(stats.total_damage_taken as f64),
    );
    features.set(WARDS_PLACED_PER_MINUTE, per_minute(stats.wards_placed as f64));
    features.set(WARDS_KILLED_PER_MINUTE, per_minute(stats.wards_killed as f64));
    features.set(VISION_SCORE_PER_MINUTE, per_minute(stats.vision_score as f64));
    features.set(EARNED_GOLD_PER_MINUTE, per_minute(stats.gold_earned as f64));
    features.set(
        CREEP_SCORE_PER_MINUTE,
        per_minute((stats.total_minions_killed + stats.neutral_minions_killed) as f64),
    );

    Ok(features)
}
