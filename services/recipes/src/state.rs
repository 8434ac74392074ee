use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use crate::infra::db::{DbAccountRepository, DbRecipeRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: DatabaseConnection,
    #[from_ref(skip)]
    pub jwt_secret: String,
    #[from_ref(skip)]
    pub token_ttl_secs: u64,
}

impl AppState {
    pub fn account_repo(&self) -> DbAccountRepository {
        DbAccountRepository {
            db: self.db.clone(),
        }
    }

    pub fn recipe_repo(&self) -> DbRecipeRepository {
        DbRecipeRepository {
            db: self.db.clone(),
        }
    }
}
