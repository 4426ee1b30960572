use std::sync::Arc;

use crate::config::Config;
use crate::projection::ModelAssets;
use crate::riot::MatchDataSource;
use crate::services::{AnalysisService, PlayerStatsService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub stats: PlayerStatsService,
    pub analysis: AnalysisService,
    /// Process-wide projector and pro coordinates, loaded once.
    pub assets: ModelAssets,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn MatchDataSource>, assets: ModelAssets) -> Self {
        let stats = PlayerStatsService::new(source);
        let analysis = AnalysisService::new(stats.clone(), assets.projector.clone());

        Self {
            config: Arc::new(config),
            stats,
            analysis,
            assets,
        }
    }
}
