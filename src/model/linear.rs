//! Logistic-regression classifier artifact.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{check_model_type, check_schema_version, ArtifactError, Classifier, ModelMetrics};

/// Model type discriminator in the artifact file.
pub const MODEL_TYPE: &str = "logistic_regression";

/// A fitted logistic regression: intercept plus one coefficient per
/// feature, with training-time metrics riding along.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    pub schema_version: u32,
    pub model_type: String,
    pub label: String,
    pub feature_names: Vec<String>,
    pub intercept: f64,
    pub coefficients: Vec<f64>,
    pub metrics: ModelMetrics,
}

impl LogisticModel {
    /// Deserialize a logistic model artifact from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read logistic model artifact: {}", path.display()))?;
        let model: LogisticModel = serde_json::from_str(&raw)
            .with_context(|| format!("Logistic model artifact is corrupt: {}", path.display()))?;
        check_schema_version(model.schema_version)?;
        check_model_type(&model.model_type, MODEL_TYPE)?;
        if model.coefficients.len() != model.feature_names.len() {
            return Err(ArtifactError::FeatureArity {
                found: model.coefficients.len(),
                expected: model.feature_names.len(),
            }
            .into());
        }
        Ok(model)
    }
}

impl Classifier for LogisticModel {
    fn label(&self) -> &str {
        &self.label
    }

    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict_probability(&self, features: &[f64]) -> Result<f64, ArtifactError> {
        if features.len() != self.coefficients.len() {
            return Err(ArtifactError::FeatureArity {
                found: features.len(),
                expected: self.coefficients.len(),
            });
        }

        let logit: f64 = self.intercept
            + features
                .iter()
                .zip(self.coefficients.iter())
                .map(|(x, w)| x * w)
                .sum::<f64>();

        Ok(sigmoid(logit))
    }

    fn metrics(&self) -> ModelMetrics {
        self.metrics
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
