use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use sitelift_core::FetchError;
use thiserror::Error;

/// Errors a handler can answer with.
///
/// Every variant is the caller's fault as far as the service is concerned, so
/// all of them map to `400` with a `{"detail": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to fetch source: {0}")]
    Fetch(#[from] FetchError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Fetch(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::info!(status = status.as_u16(), error = %self, "request rejected");
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
