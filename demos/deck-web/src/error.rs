use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use ygodeck_sdk::YgoError;

/// Failed request, rendered as `{"error": "..."}`.
///
/// Upstream catalog failures answer 502, malformed client input 400, and an
/// identifier missing from the catalog 404.
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            message: msg.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<YgoError> for AppError {
    fn from(e: YgoError) -> Self {
        let status = match &e {
            YgoError::FetchFailed(_) | YgoError::DecodeFailed(_) => StatusCode::BAD_GATEWAY,
            YgoError::InvalidIdentifier(_) | YgoError::EmptyQuery(_) => StatusCode::BAD_REQUEST,
            YgoError::NotFound(_) => StatusCode::NOT_FOUND,
            YgoError::InvalidArgument(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        match e {
            YgoError::NotFound(msg) => AppError::new(status, msg),
            other => AppError::new(status, other.to_string()),
        }
    }
}
