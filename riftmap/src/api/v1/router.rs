use axum::{
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

use super::handlers;

pub fn v1_router() -> Router<AppState> {
    let players = Router::new()
        .route("/analyze", get(handlers::players::analyze))
        .route("/stats", get(handlers::players::stats))
        .route("/transform", post(handlers::transform::transform));

    let assets = Router::new()
        .route("/pro-stats/coords", get(handlers::assets::pro_coords))
        .route("/warmup", get(handlers::assets::warmup));

    let docs = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router());

    Router::new().merge(docs).merge(players).merge(assets)
}
