use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use bento_auth::account::AccountError;
use bento_core::error::error_response;

/// Iris service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum IrisServiceError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

impl IrisServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<AccountError> for IrisServiceError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::UsernameTaken => Self::UserAlreadyExists,
            AccountError::InvalidCredentials => Self::InvalidCredentials,
            AccountError::InvalidToken => Self::InvalidToken,
            AccountError::MissingField(field) => Self::MissingField(field),
            AccountError::Internal(e) => Self::Internal(e),
        }
    }
}

impl IntoResponse for IrisServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingField(_) | Self::UserAlreadyExists => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        error_response(status, self.kind(), self.to_string())
    }
}
