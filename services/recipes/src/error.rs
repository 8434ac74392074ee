use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use bento_auth::account::AccountError;
use bento_core::error::{AppError, error_response};
use bento_domain::recipe::InvalidField;

/// Recipes service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum RecipesServiceError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Invalid value for {0}")]
    InvalidField(&'static str),
    #[error("No data provided")]
    MissingData,
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Recipe not found")]
    RecipeNotFound,
    #[error(transparent)]
    Request(#[from] AppError),
    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

impl RecipesServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidField(_) => "INVALID_FIELD",
            Self::MissingData => "MISSING_DATA",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::RecipeNotFound => "RECIPE_NOT_FOUND",
            Self::Request(e) => e.kind(),
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<AccountError> for RecipesServiceError {
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

impl From<InvalidField> for RecipesServiceError {
    fn from(err: InvalidField) -> Self {
        Self::InvalidField(err.field)
    }
}

impl IntoResponse for RecipesServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Request(e) => e.status(),
            Self::MissingField(_)
            | Self::InvalidField(_)
            | Self::MissingData
            | Self::UserAlreadyExists => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::RecipeNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        error_response(status, self.kind(), self.to_string())
    }
}
