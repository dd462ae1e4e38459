//! Fitted preprocessing artifact: standard scaling plus one-hot encoding.
//!
//! The artifact records the scaling parameters and category lists that were
//! fitted at training time. Applying it to a new record is a pure lookup;
//! nothing here learns anything.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{check_schema_version, ArtifactError, CustomerProfile, Transformer};

/// Scaling parameters for one numeric input, fitted at training time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericScaler {
    pub name: String,
    pub mean: f64,
    pub std: f64,
}

/// Fitted category list for one categorical input, in one-hot slot order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEncoder {
    pub name: String,
    pub categories: Vec<String>,
}

/// The serialized preprocessing transformer.
///
/// Output layout: scaled numeric fields first (artifact order), then the
/// one-hot slots of each categorical field (artifact order). The layout is
/// exposed through [`Transformer::feature_names`] so the store can verify
/// that classifiers expect exactly this vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedPreprocessor {
    pub schema_version: u32,
    pub numeric: Vec<NumericScaler>,
    pub categorical: Vec<CategoryEncoder>,
}

impl FittedPreprocessor {
    /// Deserialize a preprocessor artifact from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read preprocessor artifact: {}", path.display()))?;
        let preprocessor: FittedPreprocessor = serde_json::from_str(&raw)
            .with_context(|| format!("Preprocessor artifact is corrupt: {}", path.display()))?;
        check_schema_version(preprocessor.schema_version)?;
        preprocessor.validate()?;
        Ok(preprocessor)
    }

    /// Length of the vectors [`Transformer::transform`] produces.
    pub fn output_len(&self) -> usize {
        self.numeric.len()
            + self
                .categorical
                .iter()
                .map(|encoder| encoder.categories.len())
                .sum::<usize>()
    }

    fn validate(&self) -> Result<(), ArtifactError> {
        for scaler in &self.numeric {
            if !(scaler.std > 0.0) || !scaler.std.is_finite() || !scaler.mean.is_finite() {
                return Err(ArtifactError::DegenerateScaler {
                    field: scaler.name.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Transformer for FittedPreprocessor {
    fn transform(&self, profile: &CustomerProfile) -> Result<Vec<f64>, ArtifactError> {
        let mut features = Vec::with_capacity(self.output_len());

        for scaler in &self.numeric {
            let value = profile.numeric_value(&scaler.name).ok_or_else(|| {
                ArtifactError::UnknownField {
                    field: scaler.name.clone(),
                }
            })?;
            features.push((value - scaler.mean) / scaler.std);
        }

        for encoder in &self.categorical {
            let value = profile.categorical_value(&encoder.name).ok_or_else(|| {
                ArtifactError::UnknownField {
                    field: encoder.name.clone(),
                }
            })?;
            let hot = encoder
                .categories
                .iter()
                .position(|category| category == value)
                .ok_or_else(|| ArtifactError::UnknownCategory {
                    field: encoder.name.clone(),
                    value: value.to_string(),
                })?;
            for slot in 0..encoder.categories.len() {
                features.push(if slot == hot { 1.0 } else { 0.0 });
            }
        }

        Ok(features)
    }

    fn feature_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.output_len());
        for scaler in &self.numeric {
            names.push(scaler.name.clone());
        }
        for encoder in &self.categorical {
            for category in &encoder.categories {
                names.push(format!("{}={}", encoder.name, category));
            }
        }
        names
    }
}
