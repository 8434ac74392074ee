use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use bento_auth::account::Credentials;
use bento_auth::usecase::{LoginUseCase, RegisterUseCase};
use bento_core::extract::ValidJson;

use crate::error::RecipesServiceError;
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

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ── POST /register ──────────────────────────────────────────────────────────

pub async fn register(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<CredentialsRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), RecipesServiceError> {
    let usecase = RegisterUseCase {
        accounts: state.account_repo(),
    };
    usecase.execute(body.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully",
        }),
    ))
}

// ── POST /login ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

pub async fn login(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<CredentialsRequest>,
) -> Result<Json<TokenResponse>, RecipesServiceError> {
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

// ── GET /protected ──────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct WhoAmIResponse {
    pub logged_in_as: String,
}

pub async fn protected(CurrentAccount(account): CurrentAccount) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        logged_in_as: account.username,
    })
}
