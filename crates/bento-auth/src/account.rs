//! Account model and the persistence port services implement.
#![allow(async_fn_in_trait)]

use std::fmt;

use bento_domain::id::AccountId;

/// A stored account. `password_hash` is a PHC string, never the plain password.
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub username: String,
    pub password_hash: String,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Username/password pair submitted to register or log in.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("User already exists")]
    UsernameTaken,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub trait AccountRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AccountError>;

    /// Insert a new account. Must return `UsernameTaken` when the store's
    /// uniqueness constraint rejects the username.
    async fn create(&self, username: &str, password_hash: &str) -> Result<Account, AccountError>;
}
