use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Render the JSON error body shared by every service:
/// `{"kind": "<UPPER_SNAKE>", "message": "<human text>"}`.
pub fn error_response(status: StatusCode, kind: &'static str, message: String) -> Response {
    let body = serde_json::json!({
        "kind": kind,
        "message": message,
    });
    (status, axum::Json(body)).into_response()
}

/// Boundary errors raised before a request reaches service code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Invalid query string")]
    InvalidQuery,
    #[error("Not found")]
    NotFound,
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::NotFound => "NOT_FOUND",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) | Self::InvalidQuery => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error_response(self.status(), self.kind(), self.to_string())
    }
}

/// Router fallback for unknown paths.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
