//! CSV loading with header normalization and column type inference.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use scrub_model::{CellValue, Column, Table};

use crate::error::Result;

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a CSV file into a [`Table`].
///
/// Headers are trimmed and whitespace-collapsed; short records are
/// padded with empty cells. A column whose non-empty cells all parse
/// as numbers becomes a numeric column; everything else stays text,
/// and empty cells become [`CellValue::Missing`].
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();

    let mut raw_columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        for (idx, cells) in raw_columns.iter_mut().enumerate() {
            let value = record.get(idx).map(normalize_cell).unwrap_or_default();
            cells.push(value);
        }
    }

    let row_count = raw_columns.first().map(Vec::len).unwrap_or(0);
    let columns: Vec<Column> = headers
        .into_iter()
        .zip(raw_columns)
        .map(|(name, cells)| Column::new(name, infer_cells(&cells)))
        .collect();

    debug!(
        source = %path.display(),
        rows = row_count,
        columns = columns.len(),
        "csv table loaded"
    );
    Ok(Table::from_columns(columns)?)
}

/// Column-wise inference: all non-empty cells numeric -> numeric column.
fn infer_cells(cells: &[String]) -> Vec<CellValue> {
    let mut any_value = false;
    let numeric = cells.iter().all(|cell| {
        if cell.is_empty() {
            return true;
        }
        any_value = true;
        cell.parse::<f64>().is_ok()
    }) && any_value;

    cells
        .iter()
        .map(|cell| {
            if cell.is_empty() {
                CellValue::Missing
            } else if numeric {
                match cell.parse::<f64>() {
                    Ok(value) => CellValue::Number(value),
                    Err(_) => CellValue::Missing,
                }
            } else {
                CellValue::Text(cell.clone())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{infer_cells, normalize_header};
    use scrub_model::CellValue;

    #[test]
    fn headers_are_trimmed_and_collapsed() {
        assert_eq!(normalize_header("  Patient   ID \u{feff}"), "Patient ID");
    }

    #[test]
    fn numeric_columns_need_every_value_to_parse() {
        let cells = vec!["1".to_string(), String::new(), "2.5".to_string()];
        let inferred = infer_cells(&cells);
        assert_eq!(inferred[0], CellValue::Number(1.0));
        assert_eq!(inferred[1], CellValue::Missing);
        assert_eq!(inferred[2], CellValue::Number(2.5));

        let mixed = vec!["1".to_string(), "abc".to_string()];
        let inferred = infer_cells(&mixed);
        assert_eq!(inferred[0], CellValue::Text("1".to_string()));
    }
}
