use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Riftmap API",
        version = "1.0.0",
        description = "Places a player's recent ranked form in the embedding space of professional players.",
    ),
    paths(
        handlers::health::health_check,
        handlers::players::analyze,
        handlers::players::stats,
        handlers::transform::transform,
        handlers::assets::pro_coords,
        handlers::assets::warmup,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        // Players
        dto::players::PlayerQuery,
        dto::players::PlayerRef,
        dto::players::AnalyzeResponse,
        dto::players::StatsResponse,
        // Transform
        dto::transform::TransformResponse,
        // Assets
        dto::assets::WarmupResponse,
        dto::assets::ArtifactsStatus,
        crate::projection::ArtifactStatus,
        // Health (handler-local types)
        handlers::health::HealthData,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "players", description = "Match aggregation and embedding projection"),
        (name = "assets", description = "Pre-trained artifacts and pro player coordinates"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
