//! Tests for artifact loading and the load-time compatibility contract

use polars::prelude::*;

use churnscope::analysis::churn_breakdown;
use churnscope::store::ArtifactStore;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_full_store_loads() {
    let (_temp_dir, store) = common::store_fixture();

    assert!(store.dataset.height() > 0, "Dataset must be non-empty");
    assert_eq!(store.classifiers().len(), 2);
}

#[test]
fn test_loaded_churn_column_is_binary() {
    let (_temp_dir, store) = common::store_fixture();

    let breakdown = churn_breakdown(&store.dataset).unwrap();
    assert_eq!(
        breakdown.len(),
        2,
        "Churn column must have exactly two distinct values"
    );
}

#[test]
fn test_missing_model_file_fails_load() {
    let mut df = common::create_churn_dataframe();
    let (_temp_dir, mut paths) = common::write_artifacts(&mut df);
    paths.forest = paths.forest.with_extension("gone.json");

    let result = ArtifactStore::load(&paths, 100);

    assert!(result.is_err(), "Missing artifact must abort the load");
}

#[test]
fn test_corrupt_artifact_fails_load() {
    let mut df = common::create_churn_dataframe();
    let (_temp_dir, paths) = common::write_artifacts(&mut df);
    std::fs::write(&paths.logistic, "{ not json").unwrap();

    let result = ArtifactStore::load(&paths, 100);

    assert!(result.is_err());
    let err_msg = format!("{:#}", result.unwrap_err());
    assert!(err_msg.contains("corrupt"), "got: {}", err_msg);
}

#[test]
fn test_wrong_model_type_fails_load() {
    let mut df = common::create_churn_dataframe();
    let (_temp_dir, paths) = common::write_artifacts(&mut df);

    // A forest artifact where the logistic model is expected.
    let mut forest = common::forest_model();
    forest.label = "Imposter".into();
    std::fs::write(
        &paths.logistic,
        serde_json::to_string_pretty(&forest).unwrap(),
    )
    .unwrap();

    let result = ArtifactStore::load(&paths, 100);

    assert!(result.is_err(), "Model type mismatch must abort the load");
}

#[test]
fn test_feature_layout_mismatch_fails_load() {
    let mut df = common::create_churn_dataframe();
    let (_temp_dir, paths) = common::write_artifacts(&mut df);

    // Refit the preprocessor with an extra contract category: its output
    // layout no longer matches what the classifiers were trained on.
    let mut preprocessor = common::fitted_preprocessor();
    preprocessor.categorical[0]
        .categories
        .push("Decade-to-decade".into());
    std::fs::write(
        &paths.preprocessor,
        serde_json::to_string_pretty(&preprocessor).unwrap(),
    )
    .unwrap();

    let result = ArtifactStore::load(&paths, 100);

    assert!(result.is_err());
    let err_msg = format!("{:#}", result.unwrap_err());
    assert!(
        err_msg.contains("preprocessor"),
        "Error should blame the pairing: {}",
        err_msg
    );
}

#[test]
fn test_unknown_schema_version_fails_load() {
    let mut df = common::create_churn_dataframe();
    let (_temp_dir, paths) = common::write_artifacts(&mut df);

    let mut logistic = common::logistic_model();
    logistic.schema_version = 99;
    std::fs::write(
        &paths.logistic,
        serde_json::to_string_pretty(&logistic).unwrap(),
    )
    .unwrap();

    let result = ArtifactStore::load(&paths, 100);

    assert!(result.is_err());
}

#[test]
fn test_dataset_missing_required_column_fails_load() {
    let mut df = common::create_churn_dataframe();
    df.drop_in_place("Contract").unwrap();
    let (_temp_dir, paths) = common::write_artifacts(&mut df);

    let result = ArtifactStore::load(&paths, 100);

    assert!(result.is_err());
    let err_msg = format!("{:#}", result.unwrap_err());
    assert!(err_msg.contains("Contract"), "got: {}", err_msg);
}

#[test]
fn test_empty_dataset_fails_load() {
    let mut empty = common::create_churn_dataframe().clear();
    let (_temp_dir, paths) = common::write_artifacts(&mut empty);

    let result = ArtifactStore::load(&paths, 100);

    assert!(result.is_err(), "Empty dataset must abort the load");
}
