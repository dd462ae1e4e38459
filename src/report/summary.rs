//! Headless dashboard summary.
//!
//! Prints the Overview and Model Performance content to stdout for use in
//! terminals without a TTY (CI logs, pipes, screenshots in docs).

use anyhow::Result;
use chrono::Utc;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::analysis::churn_breakdown;
use crate::model::Classifier;
use crate::store::ArtifactStore;

/// Print dataset statistics, the churn breakdown, and both models'
/// training-time metrics.
pub fn print_summary(store: &ArtifactStore) -> Result<()> {
    let (rows, cols) = store.dataset.shape();
    let memory_mb = store.dataset.estimated_size() as f64 / (1024.0 * 1024.0);

    println!();
    println!(
        "    {} {}",
        style("📊").cyan(),
        style("DATASET").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!("      Rows: {}", style(rows).yellow().bold());
    println!("      Columns: {}", style(cols).yellow().bold());
    println!("      Estimated memory: {:.2} MB", memory_mb);

    let breakdown = churn_breakdown(&store.dataset)?;

    let mut churn_table = Table::new();
    churn_table.load_preset(UTF8_FULL_CONDENSED);
    churn_table.set_header(vec![
        Cell::new("Churn").add_attribute(Attribute::Bold),
        Cell::new("Customers").add_attribute(Attribute::Bold),
        Cell::new("Share").add_attribute(Attribute::Bold),
    ]);
    for slice in &breakdown {
        let color = if slice.label == "Yes" {
            Color::Red
        } else {
            Color::Green
        };
        churn_table.add_row(vec![
            Cell::new(&slice.label).fg(color),
            Cell::new(slice.count),
            Cell::new(format!("{:.1}%", slice.share)),
        ]);
    }

    println!();
    for line in churn_table.to_string().lines() {
        println!("    {}", line);
    }

    println!();
    println!(
        "    {} {}",
        style("🧠").cyan(),
        style("MODEL PERFORMANCE").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());

    let mut metrics_table = Table::new();
    metrics_table.load_preset(UTF8_FULL_CONDENSED);
    metrics_table.set_header(vec![
        Cell::new("Model").add_attribute(Attribute::Bold),
        Cell::new("Accuracy").add_attribute(Attribute::Bold),
        Cell::new("Recall").add_attribute(Attribute::Bold),
        Cell::new("F1-Score").add_attribute(Attribute::Bold),
        Cell::new("ROC-AUC").add_attribute(Attribute::Bold),
    ]);
    for model in store.classifiers() {
        let metrics = model.metrics();
        metrics_table.add_row(vec![
            Cell::new(model.label()).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", metrics.accuracy)),
            Cell::new(format!("{:.2}", metrics.recall)),
            Cell::new(format!("{:.2}", metrics.f1)),
            Cell::new(format!("{:.2}", metrics.roc_auc)).fg(Color::Yellow),
        ]);
    }

    println!();
    for line in metrics_table.to_string().lines() {
        println!("    {}", line);
    }

    println!();
    println!(
        "    {}",
        style(format!("Generated {}", Utc::now().to_rfc3339())).dim()
    );

    Ok(())
}
