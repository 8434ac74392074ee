use std::sync::Arc;

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use crate::infra::db::{DbAccountRepository, DbPredictionLogRepository};
use crate::infra::model::ForestModel;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: DatabaseConnection,
    #[from_ref(skip)]
    pub model: Arc<ForestModel>,
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

    pub fn prediction_log_repo(&self) -> DbPredictionLogRepository {
        DbPredictionLogRepository {
            db: self.db.clone(),
        }
    }

    pub fn classifier(&self) -> Arc<ForestModel> {
        Arc::clone(&self.model)
    }
}
