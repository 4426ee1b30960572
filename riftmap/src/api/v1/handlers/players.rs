//! v1 player handlers.
//!
//! Both endpoints aggregate the player's five most recent ranked matches.
//! `/analyze` additionally projects the aggregate into the embedding space.

use axum::extract::State;

use crate::api::extractors::AppQuery;
use crate::api::v1::dto::{AnalyzeResponse, PlayerQuery, StatsResponse};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;

/// `GET /api/v1/analyze`
#[utoipa::path(
    get,
    path = "/api/v1/analyze",
    tag = "players",
    operation_id = "players.analyze",
    params(PlayerQuery),
    responses(
        (status = 200, description = "Player coordinates (null when no ranked matches)", body = AnalyzeResponse),
        (status = 400, description = "Missing or empty gameName/tagLine", body = ApiError),
        (status = 404, description = "Player not found", body = ApiError),
        (status = 503, description = "Model assets unavailable", body = ApiError),
    )
)]
pub async fn analyze(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PlayerQuery>,
) -> ApiResponse<AnalyzeResponse> {
    let identity = match query.identity() {
        Ok(identity) => identity,
        Err(e) => return e.into(),
    };

    match state.analysis.analyze(&identity).await {
        Ok(analysis) => ApiResponse::success(AnalyzeResponse::new(&identity, analysis)),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/stats`
#[utoipa::path(
    get,
    path = "/api/v1/stats",
    tag = "players",
    operation_id = "players.stats",
    params(PlayerQuery),
    responses(
        (status = 200, description = "Averaged feature vector (null when no ranked matches)", body = StatsResponse),
        (status = 400, description = "Missing or empty gameName/tagLine", body = ApiError),
        (status = 404, description = "Player not found", body = ApiError),
    )
)]
pub async fn stats(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PlayerQuery>,
) -> ApiResponse<StatsResponse> {
    let identity = match query.identity() {
        Ok(identity) => identity,
        Err(e) => return e.into(),
    };

    match state.stats.player_averages(&identity).await {
        Ok(averages) => ApiResponse::success(StatsResponse::new(&identity, averages)),
        Err(e) => e.into(),
    }
}
