//! Checkpoint features from the per-minute match timeline.
//!
//! Frames are walked in order (`frames[i]` is minute `i`) while kill, assist
//! and death tallies accumulate for the player and their lane opponent. At
//! every checkpoint minute the running tallies and that frame's gold/XP/CS
//! snapshot are recorded. Checkpoints the match never reached are written as
//! missing values so every match yields the same key set.

use crate::error::{Result, RiftmapError};
use crate::features::schema::{CheckpointMetric, FeatureVector, CHECKPOINT_MINUTES};
use crate::riot::types::{Frame, MatchTimeline, TimelineEvent};
use crate::riot::PlayerKey;

const TEAM_SIZE: u32 = 5;

/// Slot of the participant playing the same role on the other team.
///
/// Slots 1..=5 are the first team and 6..=10 the second, in role order, so
/// the opponent always sits exactly one team size away.
pub fn lane_opponent_slot(slot: u32) -> Result<u32> {
    match slot {
        1..=5 => Ok(slot + TEAM_SIZE),
        6..=10 => Ok(slot - TEAM_SIZE),
        _ => Err(RiftmapError::Extraction(format!(
            "Participant slot {slot} outside 1..=10"
        ))),
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct KillTally {
    kills: u32,
    assists: u32,
    deaths: u32,
}

impl KillTally {
    /// Credits at most one of kill, assist or death, in that order.
    fn record(&mut self, slot: u32, killer_id: u32, victim_id: u32, assisting: &[u32]) {
        if killer_id == slot {
            self.kills += 1;
        } else if assisting.contains(&slot) {
            self.assists += 1;
        } else if victim_id == slot {
            self.deaths += 1;
        }
    }
}

pub fn timeline_features(timeline: &MatchTimeline, player: &PlayerKey) -> Result<FeatureVector> {
    let slot = timeline
        .info
        .participants
        .iter()
        .find(|p| p.puuid == player.as_str())
        .map(|p| p.participant_id)
        .ok_or_else(|| {
            RiftmapError::Extraction(format!(
                "Player {player} not found in timeline participants"
            ))
        })?;
    let opponent = lane_opponent_slot(slot)?;

    let frames = &timeline.info.frames;
    let last_checkpoint = CHECKPOINT_MINUTES.iter().copied().max().unwrap_or(0);

    let mut features = FeatureVector::new();
    let mut own = KillTally::default();
    let mut opp = KillTally::default();

    for (minute, frame) in frames.iter().enumerate().take(last_checkpoint + 1) {
        for event in &frame.events {
            if let TimelineEvent::ChampionKill {
                killer_id,
                victim_id,
                assisting_participant_ids,
            } = event
            {
                own.record(slot, *killer_id, *victim_id, assisting_participant_ids);
                opp.record(opponent, *killer_id, *victim_id, assisting_participant_ids);
            }
        }

        if CHECKPOINT_MINUTES.contains(&minute) {
            write_checkpoint(&mut features, minute, frame, (slot, own), (opponent, opp))?;
        }
    }

    for minute in CHECKPOINT_MINUTES {
        if minute >= frames.len() {
            for metric in CheckpointMetric::ALL {
                features.set_missing(metric.key(minute));
            }
        }
    }

    Ok(features)
}

fn write_checkpoint(
    features: &mut FeatureVector,
    minute: usize,
    frame: &Frame,
    (slot, own): (u32, KillTally),
    (opponent, opp): (u32, KillTally),
) -> Result<()> {
    let missing_frame = |s: u32| {
        RiftmapError::Extraction(format!(
            "No participant frame for slot {s} at minute {minute}"
        ))
    };
    let own_frame = frame.participant(slot).ok_or_else(|| missing_frame(slot))?;
    let opp_frame = frame
        .participant(opponent)
        .ok_or_else(|| missing_frame(opponent))?;

    let own_cs = own_frame.creep_score();
    let opp_cs = opp_frame.creep_score();

    let values = [
        (CheckpointMetric::Gold, own_frame.total_gold as f64),
        (CheckpointMetric::Xp, own_frame.xp as f64),
        (CheckpointMetric::CreepScore, own_cs as f64),
        (
            CheckpointMetric::GoldDiff,
            (own_frame.total_gold - opp_frame.total_gold) as f64,
        ),
        (CheckpointMetric::XpDiff, (own_frame.xp - opp_frame.xp) as f64),
        (CheckpointMetric::CreepScoreDiff, (own_cs - opp_cs) as f64),
        (CheckpointMetric::Kills, own.kills as f64),
        (CheckpointMetric::Assists, own.assists as f64),
        (CheckpointMetric::Deaths, own.deaths as f64),
        (CheckpointMetric::OppGold, opp_frame.total_gold as f64),
        (CheckpointMetric::OppXp, opp_frame.xp as f64),
        (CheckpointMetric::OppCreepScore, opp_cs as f64),
        (CheckpointMetric::OppKills, opp.kills as f64),
        (CheckpointMetric::OppAssists, opp.assists as f64),
        (CheckpointMetric::OppDeaths, opp.deaths as f64),
    ];
    for (metric, value) in values {
        features.set(metric.key(minute), value);
    }
    Ok(())
}
