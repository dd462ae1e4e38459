//! Shared test utilities and fixture generators

use std::path::PathBuf;

use polars::prelude::*;
use tempfile::TempDir;

use churnscope::model::{
    forest::{DecisionTree, ForestModel, ImportanceEntry, TreeNode},
    linear::LogisticModel,
    preprocess::{CategoryEncoder, FittedPreprocessor, NumericScaler},
    Contract, InternetService, ModelMetrics, PaymentMethod,
};
use churnscope::store::{ArtifactPaths, ArtifactStore};

/// A small churn dataset with the full required column set plus a couple
/// of extra numeric and string columns, mirroring the real dataset shape.
pub fn create_churn_dataframe() -> DataFrame {
    df! {
        "customerID" => ["A-1", "A-2", "A-3", "A-4", "A-5", "A-6", "A-7", "A-8", "A-9", "A-10"],
        "tenure" => [1i64, 3, 7, 12, 24, 30, 45, 60, 68, 72],
        "MonthlyCharges" => [85.5f64, 90.2, 74.4, 25.1, 55.9, 99.0, 60.3, 20.4, 80.1, 19.9],
        "TotalCharges" => [85.5f64, 270.6, 520.8, 301.2, 1341.6, 2970.0, 2713.5, 1224.0, 5446.8, 1432.8],
        "SeniorCitizen" => [0i64, 1, 0, 0, 0, 1, 0, 0, 1, 0],
        "Contract" => ["Month-to-month", "Month-to-month", "Month-to-month", "One year",
                       "One year", "Month-to-month", "Two year", "Two year", "One year", "Two year"],
        "PaymentMethod" => ["Electronic check", "Electronic check", "Mailed check",
                            "Bank transfer (automatic)", "Credit card (automatic)", "Electronic check",
                            "Bank transfer (automatic)", "Mailed check", "Credit card (automatic)",
                            "Bank transfer (automatic)"],
        "InternetService" => ["Fiber optic", "Fiber optic", "DSL", "No", "DSL",
                              "Fiber optic", "DSL", "No", "Fiber optic", "No"],
        "Churn" => ["Yes", "Yes", "No", "No", "No", "Yes", "No", "No", "No", "No"],
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("test_data.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// A preprocessor fitted on the full categorical domains, producing the
/// 12-slot layout the fixture models expect.
pub fn fitted_preprocessor() -> FittedPreprocessor {
    FittedPreprocessor {
        schema_version: 1,
        numeric: vec![
            NumericScaler {
                name: "tenure".into(),
                mean: 32.0,
                std: 24.0,
            },
            NumericScaler {
                name: "MonthlyCharges".into(),
                mean: 65.0,
                std: 30.0,
            },
        ],
        categorical: vec![
            CategoryEncoder {
                name: "Contract".into(),
                categories: Contract::ALL.iter().map(|c| c.as_str().into()).collect(),
            },
            CategoryEncoder {
                name: "PaymentMethod".into(),
                categories: PaymentMethod::ALL.iter().map(|p| p.as_str().into()).collect(),
            },
            CategoryEncoder {
                name: "InternetService".into(),
                categories: InternetService::ALL.iter().map(|i| i.as_str().into()).collect(),
            },
        ],
    }
}

fn feature_names() -> Vec<String> {
    use churnscope::model::Transformer;
    fitted_preprocessor().feature_names()
}

pub fn logistic_model() -> LogisticModel {
    LogisticModel {
        schema_version: 1,
        model_type: "logistic_regression".into(),
        label: "Logistic Regression".into(),
        feature_names: feature_names(),
        intercept: -1.1,
        coefficients: vec![
            -0.9, 0.25, 0.6, -0.2, -0.8, 0.4, -0.1, -0.15, -0.2, -0.2, 0.55, -0.45,
        ],
        metrics: ModelMetrics {
            accuracy: 0.80,
            recall: 0.72,
            f1: 0.75,
            roc_auc: 0.83,
        },
    }
}

pub fn forest_model() -> ForestModel {
    let stump = |feature: usize, threshold: f64, low: f64, high: f64| DecisionTree {
        nodes: vec![
            TreeNode::Split {
                feature,
                threshold,
                left: 1,
                right: 2,
            },
            TreeNode::Leaf { probability: low },
            TreeNode::Leaf { probability: high },
        ],
    };

    ForestModel {
        schema_version: 1,
        model_type: "random_forest".into(),
        label: "Random Forest".into(),
        feature_names: feature_names(),
        trees: vec![
            // Low tenure churns more
            stump(0, -0.8, 0.55, 0.2),
            // High charges churn more
            stump(1, 0.5, 0.25, 0.5),
            // Month-to-month churns more
            stump(2, 0.5, 0.15, 0.4),
            // Fiber optic churns more
            stump(10, 0.5, 0.2, 0.45),
        ],
        feature_importances: vec![
            ImportanceEntry {
                label: "Tenure & TotalCharges".into(),
                weight: 0.25,
            },
            ImportanceEntry {
                label: "MonthlyCharges".into(),
                weight: 0.20,
            },
            ImportanceEntry {
                label: "Contract Type".into(),
                weight: 0.15,
            },
        ],
        metrics: ModelMetrics {
            accuracy: 0.82,
            recall: 0.74,
            f1: 0.77,
            roc_auc: 0.83,
        },
    }
}

/// Write all four fixture artifacts into a temp dir and return the paths.
pub fn write_artifacts(df: &mut DataFrame) -> (TempDir, ArtifactPaths) {
    let temp_dir = TempDir::new().unwrap();

    let data = temp_dir.path().join("churn.csv");
    let mut file = std::fs::File::create(&data).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    let preprocessor = temp_dir.path().join("preprocessor.json");
    std::fs::write(
        &preprocessor,
        serde_json::to_string_pretty(&fitted_preprocessor()).unwrap(),
    )
    .unwrap();

    let logistic = temp_dir.path().join("logistic.json");
    std::fs::write(
        &logistic,
        serde_json::to_string_pretty(&logistic_model()).unwrap(),
    )
    .unwrap();

    let forest = temp_dir.path().join("random_forest.json");
    std::fs::write(
        &forest,
        serde_json::to_string_pretty(&forest_model()).unwrap(),
    )
    .unwrap();

    (
        temp_dir,
        ArtifactPaths {
            data,
            preprocessor,
            logistic,
            forest,
        },
    )
}

/// A fully loaded store over the fixture dataset and artifacts.
pub fn store_fixture() -> (TempDir, ArtifactStore) {
    let mut df = create_churn_dataframe();
    let (temp_dir, paths) = write_artifacts(&mut df);
    let store = ArtifactStore::load(&paths, 100).unwrap();
    (temp_dir, store)
}
