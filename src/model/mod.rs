//! Pre-fitted model artifacts and the seams they plug into.
//!
//! Everything in this module is fitted elsewhere and consumed here as a
//! serialized artifact: a preprocessor mapping raw customer records to
//! feature vectors, and two classifiers mapping feature vectors to churn
//! probabilities. The [`Transformer`] and [`Classifier`] traits are the
//! only contracts the rest of the application depends on, so concrete
//! models are interchangeable at every call site.

pub mod forest;
pub mod linear;
pub mod preprocess;

pub use forest::{ForestModel, ImportanceEntry};
pub use linear::LogisticModel;
pub use preprocess::FittedPreprocessor;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Artifact schema version this build understands.
pub const SCHEMA_VERSION: u32 = 1;

/// Upper slider bound for tenure, in months.
pub const TENURE_MAX: u32 = 72;

/// Upper slider bound for monthly charges, in whole currency units.
pub const MONTHLY_CHARGES_MAX: u32 = 150;

/// Typed failures of the artifact layer.
///
/// Every variant is a load-time or prediction-time incompatibility between
/// this process and the artifacts it was pointed at. None of them are
/// recoverable within a session.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("unsupported artifact schema version {found} (this build reads version {expected})")]
    SchemaVersion { found: u32, expected: u32 },

    #[error("artifact declares model type '{found}', expected '{expected}'")]
    ModelType { found: String, expected: &'static str },

    #[error("preprocessor references field '{field}' which is not part of a customer record")]
    UnknownField { field: String },

    #[error("unknown category '{value}' for field '{field}'")]
    UnknownCategory { field: String, value: String },

    #[error("scaler for '{field}' has non-positive standard deviation")]
    DegenerateScaler { field: String },

    #[error("feature count mismatch: got {found}, expected {expected}")]
    FeatureArity { found: usize, expected: usize },

    #[error("tree {tree}: node index {node} out of bounds ({len} nodes)")]
    DanglingNode { tree: usize, node: usize, len: usize },

    #[error("tree {tree}: leaf probability {value} outside [0, 1]")]
    LeafRange { tree: usize, value: f64 },

    #[error("tree {tree}: traversal did not reach a leaf, tree is cyclic or malformed")]
    TraversalLimit { tree: usize },

    #[error("ensemble contains no trees")]
    EmptyEnsemble,
}

/// Performance metrics measured at training time and shipped inside each
/// classifier artifact. Displayed verbatim by the Model Performance view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub accuracy: f64,
    pub recall: f64,
    pub f1: f64,
    pub roc_auc: f64,
}

/// A prediction request: one customer record minus the churn label.
///
/// Field names and categorical domains mirror the dataset columns the
/// preprocessor was fitted on. The form and CLI bound every field, so any
/// constructible profile is in-domain for a matching preprocessor.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerProfile {
    /// Months the customer has been subscribed, 0 to [`TENURE_MAX`].
    pub tenure: u32,
    /// Current monthly bill, 0 to [`MONTHLY_CHARGES_MAX`].
    pub monthly_charges: f64,
    pub contract: Contract,
    pub payment_method: PaymentMethod,
    pub internet_service: InternetService,
}

impl Default for CustomerProfile {
    fn default() -> Self {
        Self {
            tenure: 12,
            monthly_charges: 70.0,
            contract: Contract::MonthToMonth,
            payment_method: PaymentMethod::ElectronicCheck,
            internet_service: InternetService::Dsl,
        }
    }
}

impl CustomerProfile {
    /// Value of a numeric input field, by dataset column name.
    pub(crate) fn numeric_value(&self, field: &str) -> Option<f64> {
        match field {
            "tenure" => Some(f64::from(self.tenure)),
            "MonthlyCharges" => Some(self.monthly_charges),
            _ => None,
        }
    }

    /// Value of a categorical input field, by dataset column name.
    pub(crate) fn categorical_value(&self, field: &str) -> Option<&'static str> {
        match field {
            "Contract" => Some(self.contract.as_str()),
            "PaymentMethod" => Some(self.payment_method.as_str()),
            "InternetService" => Some(self.internet_service.as_str()),
            _ => None,
        }
    }
}

macro_rules! categorical_enum {
    ($(#[$doc:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The label as it appears in the dataset.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(format!(
                        "unknown value '{}', expected one of: {}",
                        other,
                        [$($label),+].join(", ")
                    )),
                }
            }
        }
    };
}

categorical_enum! {
    /// Contract length, as enumerated in the dataset.
    Contract {
        MonthToMonth => "Month-to-month",
        OneYear => "One year",
        TwoYear => "Two year",
    }
}

categorical_enum! {
    /// Payment method, as enumerated in the dataset.
    PaymentMethod {
        ElectronicCheck => "Electronic check",
        MailedCheck => "Mailed check",
        BankTransfer => "Bank transfer (automatic)",
        CreditCard => "Credit card (automatic)",
    }
}

categorical_enum! {
    /// Internet service type, as enumerated in the dataset.
    InternetService {
        Dsl => "DSL",
        FiberOptic => "Fiber optic",
        No => "No",
    }
}

/// Maps a raw customer record to the numeric feature vector the
/// classifiers consume. Pure: identical input yields identical output.
pub trait Transformer {
    fn transform(&self, profile: &CustomerProfile) -> Result<Vec<f64>, ArtifactError>;

    /// Names of the output vector slots, in order. Used to verify that a
    /// preprocessor and a classifier were fitted together.
    fn feature_names(&self) -> Vec<String>;
}

/// A fitted binary classifier returning the churn probability for a
/// feature vector. Pure: identical input yields identical output.
pub trait Classifier {
    /// Human-readable model name for display.
    fn label(&self) -> &str;

    /// Feature layout this model was trained on.
    fn feature_names(&self) -> &[String];

    /// Probability of churn in [0, 1].
    fn predict_probability(&self, features: &[f64]) -> Result<f64, ArtifactError>;

    /// Training-time evaluation metrics.
    fn metrics(&self) -> ModelMetrics;
}

pub(crate) fn check_schema_version(found: u32) -> Result<(), ArtifactError> {
    if found != SCHEMA_VERSION {
        return Err(ArtifactError::SchemaVersion {
            found,
            expected: SCHEMA_VERSION,
        });
    }
    Ok(())
}

pub(crate) fn check_model_type(found: &str, expected: &'static str) -> Result<(), ArtifactError> {
    if found != expected {
        return Err(ArtifactError::ModelType {
            found: found.to_string(),
            expected,
        });
    }
    Ok(())
}
