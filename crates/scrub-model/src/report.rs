//! Typed cleaning report schema.
//!
//! Each pipeline stage records its counts directly into these
//! structures; nothing is aggregated by string-matching summary keys.
//! The whole report serializes to a nested JSON object.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Row/column shape of a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableShape {
    pub rows: usize,
    pub columns: usize,
}

/// Before/after invalid counts for one validated column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldHealth {
    /// Human-readable field label, e.g. "Phones in Contact Number".
    pub field: String,
    /// Invalid cells before cleaning (heuristic criterion).
    pub before: u64,
    /// Invalid cells after cleaning (validator criterion).
    pub after: u64,
    /// `after` as a percentage of the original row count.
    pub percent_of_rows: f64,
    /// Percentage of `before` resolved by cleaning; 0 when `before` is 0.
    pub percent_improvement: f64,
}

/// Per-column outlier counts and their sum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutlierSummary {
    pub per_column: BTreeMap<String, u64>,
    pub total: u64,
}

/// Finalized diagnostic report for one cleaning run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub original_shape: TableShape,
    pub final_shape: TableShape,
    pub rows_dropped: usize,
    pub percent_rows_dropped: f64,
    pub duplicate_rows_dropped: usize,
    pub columns_removed: Vec<String>,
    /// Names of validation-flag columns added to the output table.
    pub validations_added: Vec<String>,
    /// Columns whose cells contained nested JSON structures.
    pub nested_fields_flagged: Vec<String>,
    /// Negative-value counts per numeric column (nonzero only).
    pub negative_values: BTreeMap<String, u64>,
    pub outliers: OutlierSummary,
    /// Before/after invalid counts per validated field; entries where
    /// both counts are zero are omitted.
    pub field_health: Vec<FieldHealth>,
}

impl CleaningReport {
    /// Looks up a health entry by its field label.
    pub fn health_for(&self, field: &str) -> Option<&FieldHealth> {
        self.field_health.iter().find(|entry| entry.field == field)
    }

    /// Total invalid cells remaining across all validated fields.
    pub fn remaining_invalid_total(&self) -> u64 {
        self.field_health.iter().map(|entry| entry.after).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::{CleaningReport, FieldHealth, TableShape};

    #[test]
    fn report_serializes_to_nested_json() {
        let report = CleaningReport {
            original_shape: TableShape {
                rows: 10,
                columns: 3,
            },
            final_shape: TableShape {
                rows: 8,
                columns: 3,
            },
            rows_dropped: 2,
            percent_rows_dropped: 20.0,
            field_health: vec![FieldHealth {
                field: "Emails in Email".to_string(),
                before: 3,
                after: 1,
                percent_of_rows: 10.0,
                percent_improvement: 66.67,
            }],
            ..CleaningReport::default()
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["original_shape"]["rows"], 10);
        assert_eq!(json["field_health"][0]["before"], 3);
        let back: CleaningReport = serde_json::from_value(json).unwrap();
        assert_eq!(back.remaining_invalid_total(), 1);
    }
}
