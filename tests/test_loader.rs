//! Unit tests for dataset loading

use polars::prelude::*;
use std::io::Write;
use tempfile::TempDir;

use churnscope::store::{load_dataset, load_dataset_with_progress};

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_load_csv_file() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    writeln!(file, "a,b,c").unwrap();
    writeln!(file, "1,2,3").unwrap();
    writeln!(file, "4,5,6").unwrap();
    drop(file);

    let (df, rows, cols, mem_mb) = load_dataset_with_progress(&csv_path, 100).unwrap();

    assert_eq!(rows, 2, "Should have 2 data rows");
    assert_eq!(cols, 3, "Should have 3 columns");
    assert_eq!(df.get_column_names(), &["a", "b", "c"]);
    assert!(mem_mb >= 0.0, "Memory estimate should be non-negative");
}

#[test]
fn test_load_parquet_file() {
    let mut df = common::create_churn_dataframe();
    let (_temp_dir, parquet_path) = common::create_temp_parquet(&mut df);

    let loaded = load_dataset(&parquet_path, 100).unwrap();

    assert_eq!(loaded.shape(), df.shape());
    assert_eq!(loaded.get_column_names(), df.get_column_names());
}

#[test]
fn test_csv_round_trip_preserves_churn_labels() {
    let mut df = common::create_churn_dataframe();
    let (_temp_dir, csv_path) = common::create_temp_csv(&mut df);

    let loaded = load_dataset(&csv_path, 100).unwrap();
    let churn = loaded.column("Churn").unwrap().as_materialized_series();

    assert_eq!(
        churn.n_unique().unwrap(),
        2,
        "Churn must have exactly two distinct values"
    );
}

#[test]
fn test_unsupported_format() {
    let temp_dir = TempDir::new().unwrap();
    let bad_path = temp_dir.path().join("test.xlsx");
    std::fs::File::create(&bad_path).unwrap();

    let result = load_dataset(&bad_path, 100);

    assert!(result.is_err(), "Unsupported format should return error");
    let err_msg = result.unwrap_err().to_string();
    assert!(
        err_msg.contains("Unsupported") || err_msg.contains("format"),
        "Error message should mention unsupported format: {}",
        err_msg
    );
}

#[test]
fn test_nonexistent_file() {
    let path = std::path::Path::new("/nonexistent/path/to/file.csv");

    let result = load_dataset(path, 100);

    assert!(result.is_err(), "Nonexistent file should return error");
}
