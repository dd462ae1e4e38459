//! Churn distribution and stacked histogram data.

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use polars::prelude::*;

/// One slice of the churn distribution chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChurnSlice {
    pub label: String,
    pub count: u64,
    /// Share of non-null rows, in percent.
    pub share: f64,
}

/// One bin of a histogram split by churn outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub stayed: u64,
    pub churned: u64,
}

impl HistogramBin {
    pub fn total(&self) -> u64 {
        self.stayed + self.churned
    }
}

/// Labels counted as a positive churn outcome.
fn is_churn_label(value: &str) -> bool {
    matches!(value, "Yes" | "1")
}

fn display_value(value: &AnyValue) -> String {
    match value {
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Count rows per distinct `Churn` value, with percentage shares.
/// Null labels are excluded from both counts and shares.
pub fn churn_breakdown(df: &DataFrame) -> Result<Vec<ChurnSlice>> {
    let churn = df.column("Churn")?;

    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for value in churn.as_materialized_series().iter() {
        if value.is_null() {
            continue;
        }
        *counts.entry(display_value(&value)).or_insert(0) += 1;
    }

    let total: u64 = counts.values().sum();
    if total == 0 {
        bail!("Churn column contains no non-null values");
    }

    Ok(counts
        .into_iter()
        .map(|(label, count)| ChurnSlice {
            label,
            count,
            share: count as f64 / total as f64 * 100.0,
        })
        .collect())
}

/// Bin a numeric column into fixed-width bins, each split into stayed and
/// churned counts. Rows with a null in either column are skipped.
pub fn stacked_histogram(df: &DataFrame, column: &str, bin_width: f64) -> Result<Vec<HistogramBin>> {
    if !(bin_width > 0.0) {
        bail!("Histogram bin width must be positive, got {}", bin_width);
    }

    let values = df.column(column)?.cast(&DataType::Float64)?;
    let values = values.f64()?;
    let churn = df.column("Churn")?;

    let mut paired: Vec<(f64, bool)> = Vec::new();
    for (value, label) in values.iter().zip(churn.as_materialized_series().iter()) {
        let (Some(value), false) = (value, label.is_null()) else {
            continue;
        };
        if !value.is_finite() {
            continue;
        }
        paired.push((value, is_churn_label(&display_value(&label))));
    }

    if paired.is_empty() {
        return Ok(Vec::new());
    }

    let min = paired.iter().map(|(v, _)| *v).fold(f64::INFINITY, f64::min);
    let max = paired
        .iter()
        .map(|(v, _)| *v)
        .fold(f64::NEG_INFINITY, f64::max);

    let first_bin = (min / bin_width).floor() as i64;
    let last_bin = (max / bin_width).floor() as i64;
    let n_bins = (last_bin - first_bin + 1) as usize;

    let mut bins: Vec<HistogramBin> = (0..n_bins)
        .map(|i| {
            let lower = (first_bin + i as i64) as f64 * bin_width;
            HistogramBin {
                lower,
                upper: lower + bin_width,
                stayed: 0,
                churned: 0,
            }
        })
        .collect();

    for (value, churned) in paired {
        let idx = ((value / bin_width).floor() as i64 - first_bin) as usize;
        // The maximum value lands exactly on its own bin's floor.
        let bin = &mut bins[idx.min(n_bins - 1)];
        if churned {
            bin.churned += 1;
        } else {
            bin.stayed += 1;
        }
    }

    Ok(bins)
}

/// First `n` rows of the given columns rendered as display strings, for
/// the dataset preview table.
pub fn head_preview(df: &DataFrame, columns: &[&str], n: usize) -> Result<Vec<Vec<String>>> {
    let head = df.head(Some(n));
    let mut rows = vec![Vec::with_capacity(columns.len()); head.height()];

    for column in columns {
        let series = head.column(column)?.as_materialized_series().clone();
        for (row, value) in series.iter().enumerate() {
            rows[row].push(if value.is_null() {
                String::from("–")
            } else {
                display_value(&value)
            });
        }
    }

    Ok(rows)
}
