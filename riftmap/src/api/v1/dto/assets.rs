use serde::Serialize;

use crate::projection::ArtifactStatus;

/// Response for `GET /v1/warmup`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WarmupResponse {
    pub model_loaded: bool,
}

/// Load state of each pre-trained artifact.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactsStatus {
    pub projector: ArtifactStatus,
    pub pro_coords: ArtifactStatus,
}
