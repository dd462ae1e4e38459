//! Load-once application state.
//!
//! The dataset and the three model artifacts are deserialized exactly once
//! at process start into an [`ArtifactStore`], which is then passed by
//! reference to every view and handler. Nothing in the store is mutated
//! after construction, so any number of readers can share it.

pub mod loader;

pub use loader::{load_dataset, load_dataset_with_progress};

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use polars::prelude::*;

use crate::model::{
    ArtifactError, Classifier, CustomerProfile, FittedPreprocessor, ForestModel, LogisticModel,
    Transformer,
};

/// Dataset columns the dashboard depends on. Loading fails if any is absent.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "tenure",
    "MonthlyCharges",
    "Contract",
    "PaymentMethod",
    "InternetService",
    "Churn",
];

/// Where to find the four input files.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub data: PathBuf,
    pub preprocessor: PathBuf,
    pub logistic: PathBuf,
    pub forest: PathBuf,
}

/// Both model probabilities for one prediction request, computed from the
/// same feature vector so they are directly comparable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionOutcome {
    pub logistic: f64,
    pub forest: f64,
}

/// The read-only artifacts every view works against.
#[derive(Debug)]
pub struct ArtifactStore {
    pub dataset: DataFrame,
    pub preprocessor: FittedPreprocessor,
    pub logistic: LogisticModel,
    pub forest: ForestModel,
}

impl ArtifactStore {
    /// Deserialize all four artifacts. Any missing, corrupt, or
    /// schema-incompatible artifact fails the whole load; there is no
    /// partial-availability mode.
    pub fn load(paths: &ArtifactPaths, infer_schema_length: usize) -> Result<Self> {
        let (dataset, _, _, _) = load_dataset_with_progress(&paths.data, infer_schema_length)?;
        validate_dataset(&dataset)?;

        let preprocessor = FittedPreprocessor::load(&paths.preprocessor)?;
        let logistic = LogisticModel::load(&paths.logistic)?;
        let forest = ForestModel::load(&paths.forest)?;

        check_compatibility(&preprocessor, &logistic)
            .context("Logistic model does not match the preprocessor")?;
        check_compatibility(&preprocessor, &forest)
            .context("Forest model does not match the preprocessor")?;

        Ok(Self {
            dataset,
            preprocessor,
            logistic,
            forest,
        })
    }

    /// The two classifiers behind one seam, for call sites that do not
    /// care which concrete model they are talking to.
    pub fn classifiers(&self) -> [&dyn Classifier; 2] {
        [&self.logistic, &self.forest]
    }

    /// The prediction flow: one profile in, one shared feature vector,
    /// two independent probabilities out. Computed fresh on every call;
    /// nothing is cached between requests.
    pub fn predict(&self, profile: &CustomerProfile) -> Result<PredictionOutcome, ArtifactError> {
        let features = self.preprocessor.transform(profile)?;
        let logistic = self.logistic.predict_probability(&features)?;
        let forest = self.forest.predict_probability(&features)?;
        Ok(PredictionOutcome { logistic, forest })
    }
}

fn validate_dataset(df: &DataFrame) -> Result<()> {
    if df.height() == 0 {
        bail!("Dataset is empty");
    }

    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    for required in REQUIRED_COLUMNS {
        if !column_names.iter().any(|name| name == required) {
            bail!(
                "Dataset is missing required column '{}'. Available columns: {:?}",
                required,
                column_names
            );
        }
    }

    Ok(())
}

/// A preprocessor and a classifier are compatible only when the vector
/// layout the preprocessor produces is exactly the layout the classifier
/// was trained on.
fn check_compatibility(
    preprocessor: &FittedPreprocessor,
    classifier: &dyn Classifier,
) -> Result<()> {
    let produced = preprocessor.feature_names();
    let expected = classifier.feature_names();
    if produced != expected {
        bail!(
            "'{}' was not fitted with this preprocessor:\n  preprocessor produces: {:?}\n  model expects:         {:?}",
            classifier.label(),
            produced,
            expected
        );
    }
    Ok(())
}
