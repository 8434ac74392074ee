#![allow(async_fn_in_trait)]

use std::sync::Arc;

use bento_domain::iris::IrisFeatures;
use bento_domain::pagination::PageRequest;

use crate::domain::types::{NewPredictionLog, PredictionLog};
use crate::error::IrisServiceError;

/// Append-only log of classifier calls.
pub trait PredictionLogRepository: Send + Sync {
    async fn append(&self, log: &NewPredictionLog) -> Result<PredictionLog, IrisServiceError>;

    /// Logs ordered by id ascending, windowed by `page`.
    async fn list(&self, page: PageRequest) -> Result<Vec<PredictionLog>, IrisServiceError>;
}

/// Maps four measurements to a class index.
///
/// Callers must not assume the index is in range.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &IrisFeatures) -> usize;
}

impl<T: Classifier + ?Sized> Classifier for Arc<T> {
    fn predict(&self, features: &IrisFeatures) -> usize {
        (**self).predict(features)
    }
}
