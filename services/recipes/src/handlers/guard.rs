use std::future::Future;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use bento_auth::account::Account;
use bento_auth::bearer::bearer_token;
use bento_auth::usecase::AuthenticateUseCase;

use crate::error::RecipesServiceError;
use crate::state::AppState;

/// The account behind a valid `Authorization: Bearer` token.
///
/// Rejects with `INVALID_TOKEN` (401) on any header, token or account failure.
pub struct CurrentAccount(pub Account);

impl FromRequestParts<AppState> for CurrentAccount {
    type Rejection = RecipesServiceError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = bearer_token(&parts.headers).map(str::to_owned);
        let usecase = AuthenticateUseCase {
            accounts: state.account_repo(),
            jwt_secret: state.jwt_secret.clone(),
        };
        async move {
            let token = token.map_err(|e| {
                tracing::debug!(reason = %e, "bearer guard rejected request");
                RecipesServiceError::InvalidToken
            })?;
            let account = usecase.execute(&token).await?;
            Ok(Self(account))
        }
    }
}
