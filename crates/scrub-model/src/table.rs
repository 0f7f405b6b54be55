//! Owned, mutable tabular data model.
//!
//! A [`Table`] is an ordered collection of named columns, each holding an
//! ordered sequence of nullable typed cells. Every mutating operation
//! preserves the invariant that all columns share the same row count;
//! constructors and row filters return an error when the caller would
//! break it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrubError};

/// A single typed, nullable cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Date(NaiveDate),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Canonical string form of the cell, used for display, CSV output,
    /// ZIP matching, and duplicate keys. Missing renders as the empty
    /// string; numbers drop insignificant trailing zeros.
    pub fn display_string(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => format_numeric(*value),
            Self::Boolean(value) => value.to_string(),
            Self::Date(value) => value.format("%Y-%m-%d").to_string(),
            Self::Missing => String::new(),
        }
    }
}

/// Formats a floating-point number without trailing zeros ("10.0" -> "10").
pub fn format_numeric(value: f64) -> String {
    let rendered = format!("{value}");
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}

/// A named, ordered sequence of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Number of missing cells.
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|cell| cell.is_missing()).count()
    }

    /// Fraction of missing cells; 0 for an empty column.
    pub fn missing_fraction(&self) -> f64 {
        if self.values.is_empty() {
            0.0
        } else {
            self.missing_count() as f64 / self.values.len() as f64
        }
    }

    /// Whether every non-missing cell holds a number.
    pub fn is_numeric(&self) -> bool {
        let mut seen_number = false;
        for cell in &self.values {
            match cell {
                CellValue::Number(_) => seen_number = true,
                CellValue::Missing => {}
                _ => return false,
            }
        }
        seen_number
    }
}

/// An ordered collection of equal-length named columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from columns, rejecting unequal lengths and
    /// duplicate names.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let height = first.values.len();
            for column in &columns {
                if column.values.len() != height {
                    return Err(ScrubError::message(format!(
                        "column {} has {} rows, expected {height}",
                        column.name,
                        column.values.len()
                    )));
                }
            }
        }
        let mut seen = std::collections::BTreeSet::new();
        for column in &columns {
            if !seen.insert(column.name.clone()) {
                return Err(ScrubError::message(format!(
                    "duplicate column name: {}",
                    column.name
                )));
            }
        }
        Ok(Self { columns })
    }

    /// Number of rows (0 for a table with no columns).
    pub fn height(&self) -> usize {
        self.columns
            .first()
            .map(|column| column.values.len())
            .unwrap_or(0)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.height() == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| column.name.clone())
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.name == name)
    }

    /// Appends a column; its length must match the current row count.
    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if !self.columns.is_empty() && column.values.len() != self.height() {
            return Err(ScrubError::message(format!(
                "column {} has {} rows, expected {}",
                column.name,
                column.values.len(),
                self.height()
            )));
        }
        if self.has_column(&column.name) {
            return Err(ScrubError::message(format!(
                "duplicate column name: {}",
                column.name
            )));
        }
        self.columns.push(column);
        Ok(())
    }

    /// Removes a column by name; returns whether it existed.
    pub fn drop_column(&mut self, name: &str) -> bool {
        let before = self.columns.len();
        self.columns.retain(|column| column.name != name);
        self.columns.len() != before
    }

    /// Keeps only the rows where the mask is true. The mask length must
    /// equal the row count.
    pub fn filter_rows(&mut self, keep: &[bool]) -> Result<()> {
        if keep.len() != self.height() {
            return Err(ScrubError::message(format!(
                "mask has {} entries, expected {}",
                keep.len(),
                self.height()
            )));
        }
        for column in &mut self.columns {
            let mut idx = 0;
            column.values.retain(|_| {
                let kept = keep[idx];
                idx += 1;
                kept
            });
        }
        Ok(())
    }

    /// The cell at (row, column name), if both exist.
    pub fn cell(&self, name: &str, row: usize) -> Option<&CellValue> {
        self.column(name).and_then(|column| column.values.get(row))
    }
}
