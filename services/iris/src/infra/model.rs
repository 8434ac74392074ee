//! Decision-forest classifier loaded from JSON.
//!
//! File layout:
//!
//! ```json
//! { "n_features": 4, "n_classes": 3,
//!   "trees": [ { "nodes": [ {"feature": 2, "threshold": 2.45, "left": 1, "right": 2},
//!                           {"class": 0}, ... ] } ] }
//! ```
//!
//! Node 0 is each tree's root. A split sends `x[feature] <= threshold` left.
//! The forest predicts the majority vote of its trees; ties go to the lowest
//! class index.

use std::path::Path;

use serde::Deserialize;

use bento_domain::iris::{FEATURE_COUNT, IrisClass, IrisFeatures};

use crate::domain::repository::Classifier;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read model file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("model file is not a valid forest")]
    Parse(#[from] serde_json::Error),
    #[error("invalid model: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class: usize,
    },
}

#[derive(Debug, Deserialize)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn evaluate(&self, x: &[f64; FEATURE_COUNT]) -> usize {
        let mut at = 0;
        loop {
            match self.nodes[at] {
                Node::Leaf { class } => return class,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => at = if x[feature] <= threshold { left } else { right },
            }
        }
    }
}

/// A validated forest. Construction guarantees every traversal terminates
/// and every index it touches is in bounds.
#[derive(Debug, Deserialize)]
pub struct ForestModel {
    n_features: usize,
    n_classes: usize,
    trees: Vec<Tree>,
}

impl ForestModel {
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_str(raw)?;
        model.validate()?;
        Ok(model)
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.n_features != FEATURE_COUNT {
            return Err(ModelError::Invalid(format!(
                "expected {FEATURE_COUNT} features, found {}",
                self.n_features
            )));
        }
        if self.n_classes != IrisClass::ALL.len() {
            return Err(ModelError::Invalid(format!(
                "expected {} classes, found {}",
                IrisClass::ALL.len(),
                self.n_classes
            )));
        }
        if self.trees.is_empty() {
            return Err(ModelError::Invalid("forest has no trees".into()));
        }

        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(ModelError::Invalid(format!("tree {t} has no nodes")));
            }
            let len = tree.nodes.len();
            for (i, node) in tree.nodes.iter().enumerate() {
                match *node {
                    Node::Split {
                        feature,
                        left,
                        right,
                        ..
                    } => {
                        if feature >= self.n_features {
                            return Err(ModelError::Invalid(format!(
                                "tree {t} node {i}: feature {feature} out of range"
                            )));
                        }
                        // Children strictly after their parent rule out cycles.
                        for child in [left, right] {
                            if child <= i || child >= len {
                                return Err(ModelError::Invalid(format!(
                                    "tree {t} node {i}: child {child} out of range"
                                )));
                            }
                        }
                    }
                    Node::Leaf { class } => {
                        if class >= self.n_classes {
                            return Err(ModelError::Invalid(format!(
                                "tree {t} node {i}: class {class} out of range"
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

impl Classifier for ForestModel {
    fn predict(&self, features: &IrisFeatures) -> usize {
        let x = features.as_array();
        let mut votes = vec![0usize; self.n_classes];
        for tree in &self.trees {
            votes[tree.evaluate(&x)] += 1;
        }

        let mut best = 0;
        for (class, &count) in votes.iter().enumerate() {
            if count > votes[best] {
                best = class;
            }
        }
        best
    }
}
