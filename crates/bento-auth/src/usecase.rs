use std::sync::LazyLock;

use anyhow::Context;
use tracing::{debug, info};

use crate::account::{Account, AccountError, AccountRepository, Credentials};
use crate::password::{hash_password, verify_password};
use crate::token::{IssuedToken, issue_token, validate_token};

/// Hash checked when the username is unknown, so both login failures cost one argon2 verify.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("bento-unknown-account").ok());

async fn hash_blocking(password: String) -> Result<String, AccountError> {
    let hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .context("join password hashing task")?
        .context("hash password")?;
    Ok(hash)
}

async fn verify_blocking(password: String, stored_hash: String) -> Result<bool, AccountError> {
    let ok = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .context("join password verification task")?
        .context("verify password")?;
    Ok(ok)
}

async fn burn_dummy_verify(password: String) {
    let _ = tokio::task::spawn_blocking(move || {
        if let Some(hash) = DUMMY_HASH.as_deref() {
            let _ = verify_password(&password, hash);
        }
    })
    .await;
}

// ── RegisterUseCase ─────────────────────────────────────────────────────────

pub struct RegisterUseCase<R: AccountRepository> {
    pub accounts: R,
}

impl<R: AccountRepository> RegisterUseCase<R> {
    pub async fn execute(&self, input: Credentials) -> Result<Account, AccountError> {
        if input.username.is_empty() {
            return Err(AccountError::MissingField("username"));
        }
        if input.password.is_empty() {
            return Err(AccountError::MissingField("password"));
        }

        if self
            .accounts
            .find_by_username(&input.username)
            .await?
            .is_some()
        {
            return Err(AccountError::UsernameTaken);
        }

        let password_hash = hash_blocking(input.password).await?;
        // The repository still reports UsernameTaken if a concurrent insert won the race.
        let account = self
            .accounts
            .create(&input.username, &password_hash)
            .await?;

        info!(account_id = %account.id, username = %account.username, "account registered");
        Ok(account)
    }
}

// ── LoginUseCase ────────────────────────────────────────────────────────────

pub struct LoginUseCase<R: AccountRepository> {
    pub accounts: R,
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
}

impl<R: AccountRepository> LoginUseCase<R> {
    pub async fn execute(&self, input: Credentials) -> Result<IssuedToken, AccountError> {
        let Some(account) = self.accounts.find_by_username(&input.username).await? else {
            burn_dummy_verify(input.password).await;
            debug!(username = %input.username, "login for unknown account");
            return Err(AccountError::InvalidCredentials);
        };

        if !verify_blocking(input.password, account.password_hash.clone()).await? {
            debug!(account_id = %account.id, "login with wrong password");
            return Err(AccountError::InvalidCredentials);
        }

        let issued = issue_token(&account.username, &self.jwt_secret, self.token_ttl_secs)
            .context("sign access token")?;
        info!(account_id = %account.id, exp = issued.exp, "access token issued");
        Ok(issued)
    }
}

// ── AuthenticateUseCase ─────────────────────────────────────────────────────

/// Resolves a bearer token to the account it was issued to.
pub struct AuthenticateUseCase<R: AccountRepository> {
    pub accounts: R,
    pub jwt_secret: String,
}

impl<R: AccountRepository> AuthenticateUseCase<R> {
    pub async fn execute(&self, token: &str) -> Result<Account, AccountError> {
        let claims = validate_token(token, &self.jwt_secret).map_err(|e| {
            debug!(reason = %e, "bearer token rejected");
            AccountError::InvalidToken
        })?;

        self.accounts
            .find_by_username(&claims.sub)
            .await?
            .ok_or_else(|| {
                debug!(username = %claims.sub, "token subject no longer exists");
                AccountError::InvalidToken
            })
    }
}
