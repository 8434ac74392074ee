use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use bento_auth::account::{Account, Credentials};
use bento_auth::usecase::{LoginUseCase, RegisterUseCase};
use bento_core::extract::ValidJson;
use bento_domain::id::AccountId;

use crate::error::IrisServiceError;
use crate::handlers::guard::CurrentAccount;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

impl From<CredentialsRequest> for Credentials {
    fn from(body: CredentialsRequest) -> Self {
        Self {
            username: body.username,
            password: body.password,
        }
    }
}

/// Public view of an account.
#[derive(Serialize)]
pub struct AccountResponse {
    pub id: AccountId,
    pub username: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
        }
    }
}

// ── POST /users/register ────────────────────────────────────────────────────

pub async fn register(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<CredentialsRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), IrisServiceError> {
    let usecase = RegisterUseCase {
        accounts: state.account_repo(),
    };
    let account = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(account.into())))
}

// ── POST /users/login ───────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

pub async fn login(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<CredentialsRequest>,
) -> Result<Json<TokenResponse>, IrisServiceError> {
    let usecase = LoginUseCase {
        accounts: state.account_repo(),
        jwt_secret: state.jwt_secret.clone(),
        token_ttl_secs: state.token_ttl_secs,
    };
    let issued = usecase.execute(body.into()).await?;
    Ok(Json(TokenResponse {
        access_token: issued.token,
    }))
}

// ── GET /users/me ───────────────────────────────────────────────────────────

pub async fn me(CurrentAccount(account): CurrentAccount) -> Json<AccountResponse> {
    Json(account.into())
}
