use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts};
use axum_extra::extract::{Query, QueryRejection};

use crate::error::RiftmapError;

/// JSON body extractor whose rejections use the v1 error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(RiftmapError))]
pub struct AppJson<T>(pub T);

/// Query-string extractor whose rejections use the v1 error envelope.
#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(RiftmapError))]
pub struct AppQuery<T>(pub T);

impl From<JsonRejection> for RiftmapError {
    fn from(rejection: JsonRejection) -> Self {
        map_json_rejection(rejection)
    }
}

impl From<QueryRejection> for RiftmapError {
    fn from(rejection: QueryRejection) -> Self {
        RiftmapError::Validation(format!("Invalid query string: {rejection}"))
    }
}

fn map_json_rejection(rejection: JsonRejection) -> RiftmapError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            RiftmapError::Validation(format!("Invalid JSON: {}", err.body_text()))
        }
        JsonRejection::JsonSyntaxError(err) => {
            RiftmapError::Validation(format!("JSON syntax error: {}", err.body_text()))
        }
        JsonRejection::MissingJsonContentType(_) => {
            RiftmapError::Validation("Missing `Content-Type: application/json` header".to_string())
        }
        JsonRejection::BytesRejection(_) => {
            RiftmapError::Internal("Failed to read request body".to_string())
        }
        _ => RiftmapError::Validation(rejection.to_string()),
    }
}
