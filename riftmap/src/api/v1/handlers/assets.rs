use axum::extract::State;

use crate::api::v1::dto::WarmupResponse;
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;
use crate::projection::ProCoordinates;

/// `GET /api/v1/pro-stats/coords`
#[utoipa::path(
    get,
    path = "/api/v1/pro-stats/coords",
    tag = "assets",
    operation_id = "assets.proCoords",
    responses(
        (status = 200, description = "Pro player name to coordinates", body = Object),
        (status = 503, description = "Coordinates artifact unavailable", body = ApiError),
    )
)]
pub async fn pro_coords(State(state): State<AppState>) -> ApiResponse<ProCoordinates> {
    match state.assets.pro_coords.get().await {
        Ok(coords) => ApiResponse::success(coords.as_ref().clone()),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/warmup`
///
/// Forces every artifact to load so the first real request pays no load cost.
#[utoipa::path(
    get,
    path = "/api/v1/warmup",
    tag = "assets",
    operation_id = "assets.warmup",
    responses(
        (status = 200, description = "Artifacts loaded", body = WarmupResponse),
        (status = 503, description = "An artifact failed to load", body = ApiError),
    )
)]
pub async fn warmup(State(state): State<AppState>) -> ApiResponse<WarmupResponse> {
    match state.assets.warm_up().await {
        Ok(()) => ApiResponse::success(WarmupResponse { model_loaded: true }),
        Err(e) => e.into(),
    }
}
