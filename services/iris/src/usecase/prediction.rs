use anyhow::anyhow;
use chrono::Utc;
use tracing::info;

use bento_domain::id::AccountId;
use bento_domain::iris::{IrisClass, IrisFeatures};
use bento_domain::pagination::PageRequest;

use crate::domain::repository::{Classifier, PredictionLogRepository};
use crate::domain::types::{NewPredictionLog, PredictionLog};
use crate::error::IrisServiceError;

// ── Predict ─────────────────────────────────────────────────────────────────

pub struct PredictUseCase<C: Classifier, R: PredictionLogRepository> {
    pub classifier: C,
    pub logs: R,
}

impl<C: Classifier, R: PredictionLogRepository> PredictUseCase<C, R> {
    /// Classify `features` and append the result to the prediction log.
    pub async fn execute(
        &self,
        requester: AccountId,
        features: IrisFeatures,
    ) -> Result<IrisClass, IrisServiceError> {
        let index = self.classifier.predict(&features);
        let class = IrisClass::from_index(index)
            .ok_or_else(|| anyhow!("classifier returned out-of-range class index {index}"))?;

        let log = self
            .logs
            .append(&NewPredictionLog {
                features,
                predicted_class: class,
                created_at: Utc::now(),
            })
            .await?;
        info!(
            prediction_id = log.id,
            account_id = %requester,
            class = class.label(),
            "prediction made"
        );
        Ok(class)
    }
}

// ── ListPredictions ─────────────────────────────────────────────────────────

pub struct ListPredictionsUseCase<R: PredictionLogRepository> {
    pub logs: R,
}

impl<R: PredictionLogRepository> ListPredictionsUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<PredictionLog>, IrisServiceError> {
        self.logs.list(page.clamped()).await
    }
}
