use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::api::v1::response::ApiResponse;

#[derive(Error, Debug)]
pub enum RiftmapError {
    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Upstream error (status {status:?}): {message}")]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    #[error("No usable match data: all {attempted} matches failed to fetch")]
    NoMatchData { attempted: usize },

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Projection error: {0}")]
    Projection(String),

    #[error("Artifact load error: {0}")]
    ArtifactLoad(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl RiftmapError {
    pub fn upstream(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for RiftmapError {
    fn into_response(self) -> Response {
        ApiResponse::<()>::from(self).into_response()
    }
}

pub type Result<T> = std::result::Result<T, RiftmapError>;
