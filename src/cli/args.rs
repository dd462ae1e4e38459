//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::model::{
    Contract, InternetService, PaymentMethod, MONTHLY_CHARGES_MAX, TENURE_MAX,
};
use crate::store::ArtifactPaths;

/// Churnscope - explore a churn dataset and score customers with two trained models
#[derive(Parser, Debug)]
#[command(name = "churnscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Dataset file path (CSV or Parquet)
    #[arg(short, long, default_value = "data/telco_churn_sample.csv")]
    pub data: PathBuf,

    /// Fitted preprocessor artifact (JSON)
    #[arg(long, default_value = "models/preprocessor.json")]
    pub preprocessor: PathBuf,

    /// Logistic regression artifact (JSON)
    #[arg(long, default_value = "models/logistic.json")]
    pub logistic: PathBuf,

    /// Random forest artifact (JSON)
    #[arg(long, default_value = "models/random_forest.json")]
    pub forest: PathBuf,

    /// Print the overview and model metrics to stdout instead of opening
    /// the interactive dashboard
    #[arg(long, default_value = "false")]
    pub headless: bool,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for a full table scan (slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one customer from the command line and exit
    Predict {
        /// Customer tenure in months
        #[arg(long, default_value = "12", value_parser = validate_tenure)]
        tenure: u32,

        /// Monthly charges in whole currency units
        #[arg(long, default_value = "70", value_parser = validate_monthly_charges)]
        monthly_charges: u32,

        /// Contract type
        #[arg(long, default_value = "Month-to-month", value_parser = parse_contract)]
        contract: Contract,

        /// Payment method
        #[arg(long, default_value = "Electronic check", value_parser = parse_payment_method)]
        payment: PaymentMethod,

        /// Internet service type
        #[arg(long, default_value = "DSL", value_parser = parse_internet_service)]
        internet: InternetService,
    },
}

impl Cli {
    /// The four artifact locations as one bundle.
    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            data: self.data.clone(),
            preprocessor: self.preprocessor.clone(),
            logistic: self.logistic.clone(),
            forest: self.forest.clone(),
        }
    }
}

/// Validator for the tenure slider bound
fn validate_tenure(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number of months", s))?;

    if value > TENURE_MAX {
        Err(format!("tenure must be between 0 and {}, got {}", TENURE_MAX, value))
    } else {
        Ok(value)
    }
}

/// Validator for the monthly-charges slider bound
fn validate_monthly_charges(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid amount", s))?;

    if value > MONTHLY_CHARGES_MAX {
        Err(format!(
            "monthly charges must be between 0 and {}, got {}",
            MONTHLY_CHARGES_MAX, value
        ))
    } else {
        Ok(value)
    }
}

fn parse_contract(s: &str) -> Result<Contract, String> {
    s.parse()
}

fn parse_payment_method(s: &str) -> Result<PaymentMethod, String> {
    s.parse()
}

fn parse_internet_service(s: &str) -> Result<InternetService, String> {
    s.parse()
}
