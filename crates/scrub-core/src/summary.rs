//! Mutable summary state accumulated across pipeline stages.
//!
//! Each cleaner/analyzer records its counts here through typed
//! methods; [`SummaryState::finalize`] derives shapes and percentages
//! into the [`CleaningReport`]. Finalization reads but never mutates
//! the accumulated state, so it is idempotent.

use std::collections::BTreeMap;

use scrub_model::{CleaningReport, FieldHealth, OutlierSummary, Table, TableShape};

/// Before/after invalid counts recorded by one validating stage.
#[derive(Debug, Clone)]
pub struct FieldCounts {
    /// Field label, e.g. "Emails in Patient Email".
    pub field: String,
    /// Invalid cells under the stage's heuristic pre-check.
    pub before: u64,
    /// Invalid cells under the stage's strict validator, post-cleaning.
    pub after: u64,
}

/// Accumulator threaded through every pipeline stage.
#[derive(Debug, Clone, Default)]
pub struct SummaryState {
    original_shape: TableShape,
    columns_removed: Vec<String>,
    validations_added: Vec<String>,
    nested_fields_flagged: Vec<String>,
    negative_values: BTreeMap<String, u64>,
    outliers: BTreeMap<String, u64>,
    duplicate_rows_dropped: usize,
    field_counts: Vec<FieldCounts>,
}

impl SummaryState {
    /// Creates an empty summary capturing the original table shape.
    pub fn new(table: &Table) -> Self {
        Self {
            original_shape: TableShape {
                rows: table.height(),
                columns: table.width(),
            },
            ..Self::default()
        }
    }

    pub fn original_shape(&self) -> TableShape {
        self.original_shape
    }

    pub fn record_removed_column(&mut self, name: impl Into<String>) {
        self.columns_removed.push(name.into());
    }

    /// Registers an added validation-flag column (deduplicated).
    pub fn record_validation_flag(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.validations_added.contains(&name) {
            self.validations_added.push(name);
        }
    }

    pub fn record_nested_field(&mut self, name: impl Into<String>) {
        self.nested_fields_flagged.push(name.into());
    }

    /// Records a before/after invalid pair for one validated field.
    pub fn record_field_counts(&mut self, field: impl Into<String>, before: u64, after: u64) {
        self.field_counts.push(FieldCounts {
            field: field.into(),
            before,
            after,
        });
    }

    /// Records a negative-value count; zero counts are dropped.
    pub fn record_negative_values(&mut self, column: impl Into<String>, count: u64) {
        if count > 0 {
            self.negative_values.insert(column.into(), count);
        }
    }

    /// Records an outlier count; zero counts are dropped.
    pub fn record_outliers(&mut self, column: impl Into<String>, count: u64) {
        if count > 0 {
            self.outliers.insert(column.into(), count);
        }
    }

    pub fn record_duplicates_dropped(&mut self, count: usize) {
        self.duplicate_rows_dropped += count;
    }

    /// Derives the finalized report against the current table.
    ///
    /// All percentage derivations guard the zero denominator and yield
    /// 0 instead of dividing. Health entries where both counts are
    /// zero are omitted.
    pub fn finalize(&self, table: &Table) -> CleaningReport {
        let final_shape = TableShape {
            rows: table.height(),
            columns: table.width(),
        };
        let original_rows = self.original_shape.rows;
        let rows_dropped = original_rows.saturating_sub(final_shape.rows);
        let percent_rows_dropped = if original_rows == 0 {
            0.0
        } else {
            round2(rows_dropped as f64 / original_rows as f64 * 100.0)
        };

        let field_health: Vec<FieldHealth> = self
            .field_counts
            .iter()
            .filter(|counts| counts.before > 0 || counts.after > 0)
            .map(|counts| {
                let percent_of_rows = if original_rows == 0 {
                    0.0
                } else {
                    round2(counts.after as f64 / original_rows as f64 * 100.0)
                };
                let percent_improvement = if counts.before == 0 {
                    0.0
                } else {
                    round2(
                        (counts.before as f64 - counts.after as f64) / counts.before as f64 * 100.0,
                    )
                };
                FieldHealth {
                    field: counts.field.clone(),
                    before: counts.before,
                    after: counts.after,
                    percent_of_rows,
                    percent_improvement,
                }
            })
            .collect();

        let total = self.outliers.values().sum();
        CleaningReport {
            original_shape: self.original_shape,
            final_shape,
            rows_dropped,
            percent_rows_dropped,
            duplicate_rows_dropped: self.duplicate_rows_dropped,
            columns_removed: self.columns_removed.clone(),
            validations_added: self.validations_added.clone(),
            nested_fields_flagged: self.nested_fields_flagged.clone(),
            negative_values: self.negative_values.clone(),
            outliers: OutlierSummary {
                per_column: self.outliers.clone(),
                total,
            },
            field_health,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
