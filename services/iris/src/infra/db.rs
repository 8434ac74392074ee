use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, SqlErr,
};

use bento_auth::account::{Account, AccountError, AccountRepository};
use bento_domain::id::AccountId;
use bento_domain::iris::IrisFeatures;
use bento_domain::pagination::PageRequest;
use bento_iris_schema::{accounts, prediction_logs};

use crate::domain::repository::PredictionLogRepository;
use crate::domain::types::{NewPredictionLog, PredictionLog};
use crate::error::IrisServiceError;

// ── Account repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbAccountRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AccountError> {
        let model = accounts::Entity::find()
            .filter(accounts::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find account by username")?;
        Ok(model.map(account_from_model))
    }

    async fn create(&self, username: &str, password_hash: &str) -> Result<Account, AccountError> {
        let inserted = accounts::ActiveModel {
            username: Set(username.to_owned()),
            password_hash: Set(password_hash.to_owned()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await;

        match inserted {
            Ok(model) => Ok(account_from_model(model)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AccountError::UsernameTaken)
            }
            Err(err) => Err(anyhow::Error::new(err).context("create account").into()),
        }
    }
}

fn account_from_model(model: accounts::Model) -> Account {
    Account {
        id: AccountId(model.id),
        username: model.username,
        password_hash: model.password_hash,
    }
}

// ── Prediction log repository ───────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPredictionLogRepository {
    pub db: DatabaseConnection,
}

impl PredictionLogRepository for DbPredictionLogRepository {
    async fn append(&self, log: &NewPredictionLog) -> Result<PredictionLog, IrisServiceError> {
        let model = prediction_logs::ActiveModel {
            sepal_length: Set(log.features.sepal_length),
            sepal_width: Set(log.features.sepal_width),
            petal_length: Set(log.features.petal_length),
            petal_width: Set(log.features.petal_width),
            predicted_class: Set(log.predicted_class.label().to_owned()),
            created_at: Set(log.created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("append prediction log")?;
        Ok(log_from_model(model))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<PredictionLog>, IrisServiceError> {
        let models = prediction_logs::Entity::find()
            .order_by_asc(prediction_logs::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(&self.db)
            .await
            .context("list prediction logs")?;
        Ok(models.into_iter().map(log_from_model).collect())
    }
}

fn log_from_model(model: prediction_logs::Model) -> PredictionLog {
    PredictionLog {
        id: model.id,
        features: IrisFeatures {
            sepal_length: model.sepal_length,
            sepal_width: model.sepal_width,
            petal_length: model.petal_length,
            petal_width: model.petal_width,
        },
        predicted_class: model.predicted_class,
        created_at: model.created_at,
    }
}
