//! Quality analyzers: non-mutating scans over numeric columns.

use tracing::debug;

use scrub_model::Table;

use crate::summary::SummaryState;

/// Counts cells below zero per numeric-role column; only nonzero
/// counts are recorded.
pub fn check_negative_values(
    table: &Table,
    numeric_columns: &[String],
    summary: &mut SummaryState,
) {
    for name in numeric_columns {
        let Some(column) = table.column(name) else {
            continue;
        };
        let count = column
            .values
            .iter()
            .filter(|cell| cell.as_number().is_some_and(|value| value < 0.0))
            .count() as u64;
        if count > 0 {
            debug!(column = %name, count, "negative values found");
        }
        summary.record_negative_values(name.clone(), count);
    }
}

/// Flags IQR outliers per numeric-role column.
///
/// Quartiles use linear-interpolation estimation; a cell is an outlier
/// below `Q1 - 1.5*IQR` or above `Q3 + 1.5*IQR`. Nonzero counts are
/// recorded per column and summed into the report total.
pub fn detect_outliers_iqr(table: &Table, numeric_columns: &[String], summary: &mut SummaryState) {
    for name in numeric_columns {
        let Some(column) = table.column(name) else {
            continue;
        };
        let mut values: Vec<f64> = column
            .values
            .iter()
            .filter_map(|cell| cell.as_number())
            .filter(|value| value.is_finite())
            .collect();
        if values.is_empty() {
            continue;
        }
        values.sort_by(f64::total_cmp);
        let q1 = quantile(&values, 0.25);
        let q3 = quantile(&values, 0.75);
        let iqr = q3 - q1;
        let lower = q1 - 1.5 * iqr;
        let upper = q3 + 1.5 * iqr;
        let count = values
            .iter()
            .filter(|value| **value < lower || **value > upper)
            .count() as u64;
        if count > 0 {
            debug!(column = %name, count, q1, q3, "outliers flagged");
        }
        summary.record_outliers(name.clone(), count);
    }
}

/// Linear-interpolation quantile over a sorted, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }
    let position = q * (sorted.len() - 1) as f64;
    let low = position.floor() as usize;
    let high = position.ceil() as usize;
    let fraction = position - low as f64;
    sorted[low] + (sorted[high] - sorted[low]) * fraction
}
