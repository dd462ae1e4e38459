//! Pearson correlation over the dataset's numeric columns.
//!
//! Two computation paths, matching their two consumers: a full matrix for
//! the EDA heatmap (standardize, then `Z^T * Z` as one matrix product) and
//! a parallel pairwise scan for the strongest-pairs list. Non-numeric
//! columns are dropped, never coerced; constant columns are dropped because
//! their correlation is undefined.

use anyhow::Result;
use faer::Mat;
use polars::prelude::*;
use rayon::prelude::*;

/// A full symmetric correlation matrix with its column labels.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// Row-major, `columns.len()` square. Diagonal is exactly 1.
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Represents a correlated pair of features.
#[derive(Debug, Clone)]
pub struct CorrelatedPair {
    pub feature1: String,
    pub feature2: String,
    pub correlation: f64,
}

/// Numeric columns cast to Float64, in frame order.
fn float_columns(df: &DataFrame) -> Vec<(String, Column)> {
    df.get_columns()
        .iter()
        .filter(|col| col.dtype().is_primitive_numeric())
        .filter_map(|col| {
            col.cast(&DataType::Float64)
                .ok()
                .map(|cast| (col.name().to_string(), cast))
        })
        .collect()
}

/// Standardize one column to zero mean and unit variance, scaled by
/// `1/sqrt(n)` so that `z_a . z_b` is directly the Pearson correlation.
/// Returns `None` for constant or all-null columns.
fn standardized(col: &Column) -> Option<Vec<f64>> {
    let ca = col.f64().ok()?;

    let mut sum = 0.0;
    let mut n_valid = 0usize;
    for value in ca.iter().flatten() {
        sum += value;
        n_valid += 1;
    }
    if n_valid == 0 {
        return None;
    }
    let mean = sum / n_valid as f64;

    let mut sum_sq_dev = 0.0;
    for value in ca.iter().flatten() {
        let dev = value - mean;
        sum_sq_dev += dev * dev;
    }
    let std = (sum_sq_dev / n_valid as f64).sqrt();
    if std == 0.0 {
        return None;
    }

    let scale = 1.0 / (n_valid as f64).sqrt();
    Some(
        ca.iter()
            .map(|value| match value {
                Some(x) => scale * (x - mean) / std,
                // Null rows contribute nothing to the product.
                None => 0.0,
            })
            .collect(),
    )
}

/// Compute the full correlation matrix over the numeric columns.
///
/// Algorithm:
/// 1. Build data matrix Z (n_rows x n_cols) of standardized columns
/// 2. Compute correlation matrix: R = Z^T * Z
pub fn correlation_matrix(df: &DataFrame) -> Result<CorrelationMatrix> {
    let float_columns = float_columns(df);

    let standardized_cols: Vec<(String, Vec<f64>)> = float_columns
        .iter()
        .filter_map(|(name, col)| standardized(col).map(|z| (name.clone(), z)))
        .collect();

    let n_cols = standardized_cols.len();
    if n_cols == 0 {
        return Ok(CorrelationMatrix {
            columns: Vec::new(),
            values: Vec::new(),
        });
    }
    let n_rows = standardized_cols[0].1.len();

    let mut z = Mat::<f64>::zeros(n_rows, n_cols);
    for (col_idx, (_, col_data)) in standardized_cols.iter().enumerate() {
        for (row_idx, &value) in col_data.iter().enumerate() {
            z[(row_idx, col_idx)] = value;
        }
    }

    let product = z.transpose() * &z;

    let columns: Vec<String> = standardized_cols
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    let values: Vec<Vec<f64>> = (0..n_cols)
        .map(|i| {
            (0..n_cols)
                .map(|j| {
                    if i == j {
                        1.0
                    } else {
                        // Floating-point products can drift a hair past +/-1.
                        product[(i, j)].clamp(-1.0, 1.0)
                    }
                })
                .collect()
        })
        .collect();

    Ok(CorrelationMatrix { columns, values })
}

/// Find the off-diagonal pairs with |r| above `threshold`, strongest
/// first. Pairs are scanned in parallel; with the handful of numeric
/// columns a churn dataset has, the pairwise path beats building the
/// matrix product.
pub fn strongest_pairs(df: &DataFrame, threshold: f64) -> Result<Vec<CorrelatedPair>> {
    let float_columns = float_columns(df);
    let n_cols = float_columns.len();

    if n_cols < 2 {
        return Ok(Vec::new());
    }

    // Upper-triangle index pairs
    let pairs: Vec<(usize, usize)> = (0..n_cols)
        .flat_map(|i| ((i + 1)..n_cols).map(move |j| (i, j)))
        .collect();

    let mut correlated: Vec<CorrelatedPair> = pairs
        .par_iter()
        .filter_map(|(i, j)| {
            let (name1, col1) = &float_columns[*i];
            let (name2, col2) = &float_columns[*j];

            let corr = pearson_correlation(col1, col2)?;
            if corr.abs() > threshold && !corr.is_nan() {
                Some(CorrelatedPair {
                    feature1: name1.clone(),
                    feature2: name2.clone(),
                    correlation: corr,
                })
            } else {
                None
            }
        })
        .collect();

    correlated.sort_by(|a, b| {
        b.correlation
            .abs()
            .partial_cmp(&a.correlation.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(correlated)
}

/// Single-pass Welford Pearson correlation of two Float64 columns.
/// Rows with a null on either side are skipped.
fn pearson_correlation(s1: &Column, s2: &Column) -> Option<f64> {
    let ca1 = s1.f64().ok()?;
    let ca2 = s2.f64().ok()?;

    if ca1.len() != ca2.len() {
        return None;
    }

    let mut n = 0.0;
    let mut mean_x = 0.0;
    let mut mean_y = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov_xy = 0.0;

    for (x, y) in ca1.iter().zip(ca2.iter()) {
        if let (Some(x), Some(y)) = (x, y) {
            n += 1.0;
            let dx = x - mean_x;
            let dy = y - mean_y;
            mean_x += dx / n;
            mean_y += dy / n;
            var_x += dx * (x - mean_x);
            var_y += dy * (y - mean_y);
            cov_xy += dx * (y - mean_y);
        }
    }

    if n < 2.0 {
        return None;
    }

    let std_x = (var_x / n).sqrt();
    let std_y = (var_y / n).sqrt();
    if std_x == 0.0 || std_y == 0.0 {
        return None;
    }

    Some(cov_xy / (n * std_x * std_y))
}
