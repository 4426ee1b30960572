//! Wire envelope shared by every v1 endpoint.
//!
//! A response carries either `data` or `error { code, message }`, never both.
//! An empty match history is a success: `data` is present and carries `null`
//! coordinates.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::RiftmapError;

/// Coarse error category, serialized in snake_case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Missing or malformed input. 400.
    InvalidRequest,
    /// Unknown player handle. 404.
    NotFound,
    /// Upstream, extraction or projection failure; details stay in the logs. 500.
    InternalError,
    /// Model artifacts could not be loaded. 503.
    ServiceUnavailable,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApiError {
    pub code: ErrorCode,
    /// Safe to show to end users.
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            status: StatusCode::OK,
        }
    }

    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(ApiError {
                code,
                message: message.into(),
            }),
            status: code.status(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status;
        match serde_json::to_value(&self) {
            Ok(body) => (status, Json(body)).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response payload");
                let fallback = ApiResponse::<()>::error(
                    ErrorCode::InternalError,
                    "An internal error occurred",
                );
                (StatusCode::INTERNAL_SERVER_ERROR, Json(fallback)).into_response()
            }
        }
    }
}

impl<T: Serialize> From<RiftmapError> for ApiResponse<T> {
    /// Only validation messages reach the caller verbatim. Every other cause
    /// is logged here and replaced by a fixed message.
    fn from(err: RiftmapError) -> Self {
        match err {
            RiftmapError::PlayerNotFound(_) => {
                ApiResponse::error(ErrorCode::NotFound, "Player not found.")
            }

            RiftmapError::Validation(ref msg) => {
                ApiResponse::error(ErrorCode::InvalidRequest, msg.clone())
            }

            RiftmapError::ArtifactLoad(ref reason) => {
                tracing::error!(reason = %reason, "Artifact unavailable for request");
                ApiResponse::error(
                    ErrorCode::ServiceUnavailable,
                    "Model assets are unavailable.",
                )
            }

            ref internal @ (RiftmapError::Upstream { .. }
            | RiftmapError::NoMatchData { .. }
            | RiftmapError::Extraction(_)
            | RiftmapError::Projection(_)
            | RiftmapError::UrlParse(_)
            | RiftmapError::Internal(_)) => {
                tracing::error!(error = %internal, "Internal error mapped to v1 response");
                ApiResponse::error(ErrorCode::InternalError, "An internal error occurred")
            }
        }
    }
}
