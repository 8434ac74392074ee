use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use bento_core::extract::{QsQuery, ValidJson};
use bento_domain::iris::{IrisClass, IrisFeatures};
use bento_domain::pagination::PageRequest;

use crate::domain::types::PredictionLog;
use crate::error::IrisServiceError;
use crate::handlers::guard::CurrentAccount;
use crate::state::AppState;
use crate::usecase::prediction::{ListPredictionsUseCase, PredictUseCase};

// ── GET / ───────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
}

pub async fn index() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Iris prediction API with JWT auth and SQLite is running",
    })
}

// ── POST /iris/predict ──────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PredictRequest {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
}

#[derive(Serialize)]
pub struct PredictResponse {
    pub prediction: usize,
    pub class_name: IrisClass,
}

pub async fn predict(
    CurrentAccount(account): CurrentAccount,
    State(state): State<AppState>,
    ValidJson(body): ValidJson<PredictRequest>,
) -> Result<Json<PredictResponse>, IrisServiceError> {
    let usecase = PredictUseCase {
        classifier: state.classifier(),
        logs: state.prediction_log_repo(),
    };
    let features = IrisFeatures {
        sepal_length: body.sepal_length,
        sepal_width: body.sepal_width,
        petal_length: body.petal_length,
        petal_width: body.petal_width,
    };
    let class = usecase.execute(account.id, features).await?;
    Ok(Json(PredictResponse {
        prediction: class.index(),
        class_name: class,
    }))
}

// ── GET /iris/classes ───────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ClassesResponse {
    pub classes: [&'static str; 3],
}

pub async fn classes() -> Json<ClassesResponse> {
    Json(ClassesResponse {
        classes: IrisClass::labels(),
    })
}

// ── GET /iris/predictions ───────────────────────────────────────────────────

#[derive(Serialize)]
pub struct PredictionLogResponse {
    pub id: i32,
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
    pub predicted_class: String,
    #[serde(serialize_with = "bento_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<PredictionLog> for PredictionLogResponse {
    fn from(log: PredictionLog) -> Self {
        Self {
            id: log.id,
            sepal_length: log.features.sepal_length,
            sepal_width: log.features.sepal_width,
            petal_length: log.features.petal_length,
            petal_width: log.features.petal_width,
            predicted_class: log.predicted_class,
            created_at: log.created_at,
        }
    }
}

pub async fn list_predictions(
    _account: CurrentAccount,
    State(state): State<AppState>,
    QsQuery(page): QsQuery<PageRequest>,
) -> Result<Json<Vec<PredictionLogResponse>>, IrisServiceError> {
    let usecase = ListPredictionsUseCase {
        logs: state.prediction_log_repo(),
    };
    let logs = usecase.execute(page).await?;
    Ok(Json(logs.into_iter().map(Into::into).collect()))
}
