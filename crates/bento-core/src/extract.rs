//! Request extractors that reject malformed input with the JSON error body.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that maps every rejection (missing content type,
/// syntax error, missing/mistyped/unknown field) to [`AppError::InvalidBody`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "rejected request body");
                Err(AppError::InvalidBody(rejection.body_text()))
            }
        }
    }
}

/// Query-string extractor backed by `serde_qs`.
///
/// A missing query string deserializes as an empty one, so `T` with only
/// optional or defaulted fields always succeeds on a bare path.
#[derive(Debug, Clone, Copy, Default)]
pub struct QsQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for QsQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    // Parse synchronously and hand back an owned future; nothing borrowed
    // from `parts` may cross the await point.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let parsed = serde_qs::from_str::<T>(parts.uri.query().unwrap_or_default())
            .map(Self)
            .map_err(|e| {
                tracing::debug!(error = %e, "rejected query string");
                AppError::InvalidQuery
            });
        async move { parsed }
    }
}
