//! Iris classification domain types.

use serde::{Deserialize, Serialize};

/// Number of measurements the classifier consumes.
pub const FEATURE_COUNT: usize = 4;

/// Flower measurements in centimetres, in classifier input order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrisFeatures {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
}

impl IrisFeatures {
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
        ]
    }
}

/// Iris species predicted by the classifier.
///
/// Wire format: class index `0..3` plus its lowercase label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IrisClass {
    Setosa = 0,
    Versicolor = 1,
    Virginica = 2,
}

impl IrisClass {
    /// All classes in index order.
    pub const ALL: [Self; 3] = [Self::Setosa, Self::Versicolor, Self::Virginica];

    /// Convert from a classifier output index. Returns `None` for unknown values.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Setosa => "setosa",
            Self::Versicolor => "versicolor",
            Self::Virginica => "virginica",
        }
    }

    /// Labels of all classes in index order.
    pub fn labels() -> [&'static str; 3] {
        Self::ALL.map(Self::label)
    }
}
