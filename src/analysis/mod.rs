//! Chart data computed from the loaded dataset.

pub mod correlation;
pub mod distribution;

pub use correlation::{
    correlation_matrix, strongest_pairs, CorrelatedPair, CorrelationMatrix,
};
pub use distribution::{
    churn_breakdown, head_preview, stacked_histogram, ChurnSlice, HistogramBin,
};
