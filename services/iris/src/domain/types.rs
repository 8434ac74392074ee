use bento_domain::iris::{IrisClass, IrisFeatures};
use chrono::{DateTime, Utc};

/// A stored prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionLog {
    pub id: i32,
    pub features: IrisFeatures,
    /// Class label as stored; labels written by this service are always one of `IrisClass::labels()`.
    pub predicted_class: String,
    pub created_at: DateTime<Utc>,
}

/// A prediction about to be appended to the log.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPredictionLog {
    pub features: IrisFeatures,
    pub predicted_class: IrisClass,
    pub created_at: DateTime<Utc>,
}
