mod analysis;
mod player_stats;

pub use analysis::{AnalysisService, PlayerAnalysis};
pub use player_stats::{PlayerAverages, PlayerStatsService};
