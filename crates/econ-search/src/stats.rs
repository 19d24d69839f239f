//! Summary statistics over a numeric column.

use econ_data::{Table, Value};
use serde::Serialize;

/// Descriptive statistics for the numeric values of a column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Number of numeric values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median (50th percentile).
    pub median: f64,
    /// Sample standard deviation; `None` with fewer than two values.
    pub std: Option<f64>,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// 25th percentile.
    pub q25: f64,
    /// 75th percentile.
    pub q75: f64,
}

impl SummaryStats {
    /// Computes statistics for a set of values. Returns `None` when `values` is empty.
    ///
    /// Percentiles interpolate linearly between the closest ranks.
    pub fn from_values(mut values: Vec<f64>) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        values.sort_by(f64::total_cmp);

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let std = (count > 1).then(|| {
            let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (squares / (count - 1) as f64).sqrt()
        });

        Some(Self {
            count,
            mean,
            median: quantile(&values, 0.5),
            std,
            min: values[0],
            max: values[count - 1],
            q25: quantile(&values, 0.25),
            q75: quantile(&values, 0.75),
        })
    }
}

/// Linear-interpolated quantile of sorted, non-empty values.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Computes summary statistics for the numeric coercion of `column`.
///
/// Returns `None` when the column is absent or holds no numeric values.
pub fn summary_stats(table: &Table, column: &str) -> Option<SummaryStats> {
    let values: Vec<f64> = table.column_values(column)?.filter_map(Value::as_f64).collect();
    SummaryStats::from_values(values)
}
