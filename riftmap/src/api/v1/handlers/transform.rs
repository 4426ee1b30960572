use axum::extract::State;
use serde_json::{Map, Value};

use crate::api::extractors::AppJson;
use crate::api::v1::dto::{features_from_body, TransformResponse};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;

/// `POST /api/v1/transform`
///
/// Projects a caller-supplied feature vector. The body is a flat object
/// holding every feature name of the fixed schema.
#[utoipa::path(
    post,
    path = "/api/v1/transform",
    tag = "players",
    operation_id = "players.transform",
    request_body(content = Object, description = "Flat map of every feature name to a number"),
    responses(
        (status = 200, description = "Coordinates for the supplied features", body = TransformResponse),
        (status = 400, description = "Missing or non-numeric feature", body = ApiError),
        (status = 503, description = "Model assets unavailable", body = ApiError),
    )
)]
pub async fn transform(
    State(state): State<AppState>,
    AppJson(body): AppJson<Map<String, Value>>,
) -> ApiResponse<TransformResponse> {
    let features = match features_from_body(&body) {
        Ok(features) => features,
        Err(e) => return e.into(),
    };

    match state.analysis.transform(&features).await {
        Ok(coordinates) => ApiResponse::success(TransformResponse { coordinates }),
        Err(e) => e.into(),
    }
}
