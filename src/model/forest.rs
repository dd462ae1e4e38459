//! Tree-ensemble classifier artifact.
//!
//! Trees are serialized as flat node arrays; node 0 is the root. The whole
//! ensemble is validated once at load, so a tree that deserializes is
//! guaranteed to resolve every traversal to a leaf.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{check_model_type, check_schema_version, ArtifactError, Classifier, ModelMetrics};

/// Model type discriminator in the artifact file.
pub const MODEL_TYPE: &str = "random_forest";

/// One node of a serialized decision tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        probability: f64,
    },
}

/// A single decision tree as a flat node array rooted at index 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walk from the root to a leaf. A well-formed tree of `n` nodes
    /// reaches a leaf within `n` steps.
    fn probability(&self, features: &[f64], tree: usize) -> Result<f64, ArtifactError> {
        let mut node = 0usize;
        for _ in 0..self.nodes.len() {
            match self.nodes.get(node).ok_or(ArtifactError::DanglingNode {
                tree,
                node,
                len: self.nodes.len(),
            })? {
                TreeNode::Leaf { probability } => return Ok(*probability),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value =
                        features
                            .get(*feature)
                            .copied()
                            .ok_or(ArtifactError::FeatureArity {
                                found: features.len(),
                                expected: *feature + 1,
                            })?;
                    node = if value <= *threshold { *left } else { *right };
                }
            }
        }
        Err(ArtifactError::TraversalLimit { tree })
    }
}

/// One entry of the importance chart shipped inside the forest artifact.
///
/// Labels are feature groups as reported by the training pipeline, not
/// one-hot slots, so they read well on a chart axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportanceEntry {
    pub label: String,
    pub weight: f64,
}

/// A fitted random-forest classifier. Prediction is the mean of the
/// per-tree leaf probabilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestModel {
    pub schema_version: u32,
    pub model_type: String,
    pub label: String,
    pub feature_names: Vec<String>,
    pub trees: Vec<DecisionTree>,
    pub feature_importances: Vec<ImportanceEntry>,
    pub metrics: ModelMetrics,
}

impl ForestModel {
    /// Deserialize a forest artifact from a JSON file and validate every
    /// tree in it.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read forest model artifact: {}", path.display()))?;
        let model: ForestModel = serde_json::from_str(&raw)
            .with_context(|| format!("Forest model artifact is corrupt: {}", path.display()))?;
        check_schema_version(model.schema_version)?;
        check_model_type(&model.model_type, MODEL_TYPE)?;
        model.validate()?;
        Ok(model)
    }

    /// Structural validation: child indices in bounds, split features
    /// within the declared layout, leaf probabilities in [0, 1].
    fn validate(&self) -> Result<(), ArtifactError> {
        if self.trees.is_empty() {
            return Err(ArtifactError::EmptyEnsemble);
        }
        for (tree_idx, tree) in self.trees.iter().enumerate() {
            for node in &tree.nodes {
                match node {
                    TreeNode::Split {
                        feature,
                        left,
                        right,
                        ..
                    } => {
                        for child in [*left, *right] {
                            if child >= tree.nodes.len() {
                                return Err(ArtifactError::DanglingNode {
                                    tree: tree_idx,
                                    node: child,
                                    len: tree.nodes.len(),
                                });
                            }
                        }
                        if *feature >= self.feature_names.len() {
                            return Err(ArtifactError::FeatureArity {
                                found: self.feature_names.len(),
                                expected: *feature + 1,
                            });
                        }
                    }
                    TreeNode::Leaf { probability } => {
                        if !(0.0..=1.0).contains(probability) {
                            return Err(ArtifactError::LeafRange {
                                tree: tree_idx,
                                value: *probability,
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Importance entries sorted by weight, heaviest first.
    pub fn sorted_importances(&self) -> Vec<ImportanceEntry> {
        let mut entries = self.feature_importances.clone();
        entries.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(std::cmp::Ordering::Equal));
        entries
    }
}

impl Classifier for ForestModel {
    fn label(&self) -> &str {
        &self.label
    }

    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict_probability(&self, features: &[f64]) -> Result<f64, ArtifactError> {
        if features.len() != self.feature_names.len() {
            return Err(ArtifactError::FeatureArity {
                found: features.len(),
                expected: self.feature_names.len(),
            });
        }
        if self.trees.is_empty() {
            return Err(ArtifactError::EmptyEnsemble);
        }

        let mut total = 0.0;
        for (tree_idx, tree) in self.trees.iter().enumerate() {
            total += tree.probability(features, tree_idx)?;
        }
        Ok(total / self.trees.len() as f64)
    }

    fn metrics(&self) -> ModelMetrics {
        self.metrics
    }
}
