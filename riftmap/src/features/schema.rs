//! Fixed feature schema shared by the extractors, the aggregator and the
//! projection artifacts.
//!
//! The names are an integration contract with the trained scaler: they must
//! match the column names it was fit on, byte for byte.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of most recent ranked matches analysed per player.
pub const MATCH_WINDOW: usize = 5;

/// In-game minutes at which comparative snapshots are taken.
pub const CHECKPOINT_MINUTES: [usize; 4] = [10, 15, 20, 25];

pub const KILLS: &str = "kills";
pub const DEATHS: &str = "deaths";
pub const ASSISTS: &str = "assists";
pub const DAMAGE_PER_MINUTE: &str = "dpm";
pub const DAMAGE_SHARE: &str = "damageshare";
pub const DAMAGE_TAKEN_PER_MINUTE: &str = "damagetakenperminute";
pub const WARDS_PLACED_PER_MINUTE: &str = "wpm";
pub const WARDS_KILLED_PER_MINUTE: &str = "wcpm";
pub const VISION_SCORE_PER_MINUTE: &str = "vspm";
/// Space-separated on purpose: this is the column name the scaler was fit on.
pub const EARNED_GOLD_PER_MINUTE: &str = "earned gpm";
pub const CREEP_SCORE_PER_MINUTE: &str = "cspm";

pub const MATCH_METRICS: [&str; 11] = [
    KILLS,
    DEATHS,
    ASSISTS,
    DAMAGE_PER_MINUTE,
    DAMAGE_SHARE,
    DAMAGE_TAKEN_PER_MINUTE,
    WARDS_PLACED_PER_MINUTE,
    WARDS_KILLED_PER_MINUTE,
    VISION_SCORE_PER_MINUTE,
    EARNED_GOLD_PER_MINUTE,
    CREEP_SCORE_PER_MINUTE,
];

/// Per-checkpoint metric prefixes; the full key is `{prefix}at{minute}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckpointMetric {
    Gold,
    Xp,
    CreepScore,
    GoldDiff,
    XpDiff,
    CreepScoreDiff,
    Kills,
    Assists,
    Deaths,
    OppGold,
    OppXp,
    OppCreepScore,
    OppKills,
    OppAssists,
    OppDeaths,
}

impl CheckpointMetric {
    pub const ALL: [CheckpointMetric; 15] = [
        Self::Gold,
        Self::Xp,
        Self::CreepScore,
        Self::GoldDiff,
        Self::XpDiff,
        Self::CreepScoreDiff,
        Self::Kills,
        Self::Assists,
        Self::Deaths,
        Self::OppGold,
        Self::OppXp,
        Self::OppCreepScore,
        Self::OppKills,
        Self::OppAssists,
        Self::OppDeaths,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Xp => "xp",
            Self::CreepScore => "cs",
            Self::GoldDiff => "golddiff",
            Self::XpDiff => "xpdiff",
            Self::CreepScoreDiff => "csdiff",
            Self::Kills => "kills",
            Self::Assists => "assists",
            Self::Deaths => "deaths",
            Self::OppGold => "opp_gold",
            Self::OppXp => "opp_xp",
            Self::OppCreepScore => "opp_cs",
            Self::OppKills => "opp_kills",
            Self::OppAssists => "opp_assists",
            Self::OppDeaths => "opp_deaths",
        }
    }

    pub fn key(self, minute: usize) -> String {
        format!("{}at{minute}", self.prefix())
    }
}

/// Every feature name, match-level first, then checkpoints in minute order.
pub fn feature_names() -> Vec<String> {
    let mut names: Vec<String> = MATCH_METRICS.iter().map(|m| m.to_string()).collect();
    for minute in CHECKPOINT_MINUTES {
        names.extend(CheckpointMetric::ALL.iter().map(|metric| metric.key(minute)));
    }
    names
}

/// Named metric values. A key mapped to `None` is present in the schema but
/// has no value for this vector (for example a checkpoint the match never
/// reached); it serializes as JSON `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector(BTreeMap<String, Option<f64>>);

impl FeatureVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.0.insert(name.into(), Some(value));
    }

    pub fn set_missing(&mut self, name: impl Into<String>) {
        self.0.insert(name.into(), None);
    }

    /// `None` when the key is absent, `Some(None)` when present without a value.
    pub fn get(&self, name: &str) -> Option<Option<f64>> {
        self.0.get(name).copied()
    }

    /// Numeric value, or `None` when absent or missing.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied().flatten()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Merges another vector into this one. The two schemas are disjoint by
    /// construction; a collision keeps the incoming value and is logged.
    pub fn merge(&mut self, other: FeatureVector) {
        for (name, value) in other.0 {
            if self.0.insert(name.clone(), value).is_some() {
                tracing::warn!(feature = %name, "Feature key collision while merging vectors");
            }
        }
    }
}

impl FromIterator<(String, Option<f64>)> for FeatureVector {
    fn from_iter<I: IntoIterator<Item = (String, Option<f64>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
