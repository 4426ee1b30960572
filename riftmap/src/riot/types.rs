//! Typed views of the upstream match-data documents.
//!
//! Only the fields the feature extractors read are modelled; everything else
//! in the payloads is ignored during deserialization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// `GET /riot/account/v1/accounts/by-riot-id/{gameName}/{tagLine}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub puuid: String,
}

/// `GET /lol/match/v5/matches/{matchId}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub info: MatchInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    /// Seconds when `game_end_timestamp` is present, milliseconds on older records.
    pub game_duration: i64,
    #[serde(default)]
    pub game_end_timestamp: Option<i64>,
    pub participants: Vec<Participant>,
}

impl MatchInfo {
    pub fn duration_minutes(&self) -> f64 {
        let seconds = match self.game_end_timestamp {
            Some(_) => self.game_duration as f64,
            None => self.game_duration as f64 / 1000.0,
        };
        seconds / 60.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub puuid: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub total_damage_taken: u64,
    pub wards_placed: u32,
    pub wards_killed: u32,
    pub vision_score: u32,
    pub gold_earned: u64,
    pub total_minions_killed: u32,
    pub neutral_minions_killed: u32,
    pub challenges: Challenges,
}

/// Precomputed per-participant ratios supplied by the upstream API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenges {
    pub damage_per_minute: f64,
    pub team_damage_percentage: f64,
}

/// `GET /lol/match/v5/matches/{matchId}/timeline`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTimeline {
    pub info: TimelineInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineInfo {
    /// One frame per elapsed minute: `frames[i]` is the state at minute `i`.
    pub frames: Vec<Frame>,
    pub participants: Vec<TimelineParticipant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineParticipant {
    pub participant_id: u32,
    pub puuid: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Keyed by participant slot rendered as a string (`"1"` ..= `"10"`).
    #[serde(default)]
    pub participant_frames: HashMap<String, ParticipantFrame>,
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
}

impl Frame {
    pub fn participant(&self, slot: u32) -> Option<&ParticipantFrame> {
        self.participant_frames.get(&slot.to_string())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantFrame {
    pub total_gold: i64,
    pub xp: i64,
    pub minions_killed: i64,
    pub jungle_minions_killed: i64,
}

impl ParticipantFrame {
    pub fn creep_score(&self) -> i64 {
        self.minions_killed + self.jungle_minions_killed
    }
}

/// Discrete timeline event. Only champion kills carry data we use; every
/// other event kind collapses into [`TimelineEvent::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TimelineEvent {
    #[serde(rename = "CHAMPION_KILL", rename_all = "camelCase")]
    ChampionKill {
        killer_id: u32,
        victim_id: u32,
        #[serde(default)]
        assisting_participant_ids: Vec<u32>,
    },
    #[serde(other)]
    Other,
}
