//! Tests for view dispatch and form statelessness across view switches

use churnscope::dashboard::{ChartData, DashboardApp, FormField, PredictionForm, View};

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_six_views_with_literal_titles() {
    let titles: Vec<&str> = View::ALL.iter().map(|view| view.title()).collect();
    assert_eq!(
        titles,
        vec![
            "Overview",
            "EDA",
            "Model Performance",
            "Feature Importance",
            "Recommendations",
            "Prediction Demo",
        ]
    );
}

#[test]
fn test_selection_is_the_active_view() {
    let (_temp_dir, store) = common::store_fixture();
    let mut app = DashboardApp::new(&store).unwrap();

    assert_eq!(app.view, View::Overview);

    app.select(2);
    assert_eq!(app.view, View::ModelPerformance);

    // Last selection wins
    app.select(4);
    app.select(1);
    assert_eq!(app.view, View::Eda);

    // Out-of-range selection clamps to the last view
    app.select(99);
    assert_eq!(app.view, View::PredictionDemo);
}

#[test]
fn test_leaving_prediction_demo_resets_the_form() {
    let (_temp_dir, store) = common::store_fixture();
    let mut app = DashboardApp::new(&store).unwrap();

    app.select(View::PredictionDemo.index());
    app.form.field = FormField::Tenure;
    app.form.adjust(30);
    app.form.outcome = Some(store.predict(&app.form.profile()).unwrap());
    assert_ne!(app.form, PredictionForm::default());

    app.select(View::Overview.index());
    assert_eq!(
        app.form,
        PredictionForm::default(),
        "No value entered in one view may survive into another"
    );
}

#[test]
fn test_staying_on_prediction_demo_keeps_the_form() {
    let (_temp_dir, store) = common::store_fixture();
    let mut app = DashboardApp::new(&store).unwrap();

    app.select(View::PredictionDemo.index());
    app.form.field = FormField::MonthlyCharges;
    app.form.adjust(10);
    let edited = app.form.clone();

    // Re-selecting the same view is not a switch.
    app.select(View::PredictionDemo.index());
    assert_eq!(app.form, edited);
}

#[test]
fn test_chart_data_covers_every_chart() {
    let (_temp_dir, store) = common::store_fixture();
    let charts = ChartData::compute(&store.dataset).unwrap();

    assert_eq!(charts.shape.0, store.dataset.height());
    assert_eq!(charts.churn.len(), 2);
    assert!(!charts.head.is_empty());
    assert!(!charts.tenure_hist.is_empty());
    assert!(!charts.charges_hist.is_empty());
    assert!(charts.heatmap.len() >= 2);
}
