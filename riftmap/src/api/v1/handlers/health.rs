use axum::extract::State;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::v1::dto::ArtifactsStatus;
use crate::api::v1::response::ApiResponse;

/// Health data returned inside the v1 envelope.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthData {
    pub status: String,
    pub version: String,
    /// Whether an upstream API key is configured.
    pub upstream_authenticated: bool,
    pub artifacts: ArtifactsStatus,
}

/// `GET /api/v1/health`
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health status", body = HealthData),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> ApiResponse<HealthData> {
    ApiResponse::success(HealthData {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        upstream_authenticated: state.config.riot.api_key.is_some(),
        artifacts: ArtifactsStatus {
            projector: state.assets.projector.status(),
            pro_coords: state.assets.pro_coords.status(),
        },
    })
}
