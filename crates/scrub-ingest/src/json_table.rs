//! JSON loading: an array of objects becomes a table.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use scrub_model::{CellValue, Column, Table};

use crate::error::{IngestError, Result};

/// Reads a JSON array of objects into a [`Table`].
///
/// Columns appear in first-seen key order; rows missing a key get a
/// missing cell. Nested objects and arrays are kept as their compact
/// JSON text so the pipeline can flag them downstream.
pub fn read_json_table(path: &Path) -> Result<Table> {
    let file = File::open(path)?;
    let value: Value = serde_json::from_reader(BufReader::new(file))?;
    let Value::Array(records) = value else {
        return Err(IngestError::Message(format!(
            "{}: expected a top-level JSON array of objects",
            path.display()
        )));
    };

    let mut names: Vec<String> = Vec::new();
    for record in &records {
        let Value::Object(map) = record else {
            return Err(IngestError::Message(format!(
                "{}: expected every array element to be an object",
                path.display()
            )));
        };
        for key in map.keys() {
            if !names.iter().any(|name| name == key) {
                names.push(key.clone());
            }
        }
    }

    let mut columns: Vec<Column> = names
        .iter()
        .map(|name| Column::new(name.clone(), Vec::with_capacity(records.len())))
        .collect();
    for record in &records {
        let Value::Object(map) = record else {
            continue;
        };
        for (name, column) in names.iter().zip(columns.iter_mut()) {
            column
                .values
                .push(map.get(name).map(cell_from_json).unwrap_or(CellValue::Missing));
        }
    }

    debug!(
        source = %path.display(),
        rows = records.len(),
        columns = columns.len(),
        "json table loaded"
    );
    Ok(Table::from_columns(columns)?)
}

fn cell_from_json(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Missing,
        Value::Bool(flag) => CellValue::Boolean(*flag),
        Value::Number(number) => match number.as_f64() {
            Some(parsed) => CellValue::Number(parsed),
            None => CellValue::Text(number.to_string()),
        },
        Value::String(text) => {
            if text.trim().is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text(text.clone())
            }
        }
        nested @ (Value::Array(_) | Value::Object(_)) => CellValue::Text(nested.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::cell_from_json;
    use scrub_model::CellValue;
    use serde_json::json;

    #[test]
    fn nested_values_keep_their_json_text() {
        let cell = cell_from_json(&json!({"a": 1}));
        assert_eq!(cell, CellValue::Text("{\"a\":1}".to_string()));
        let cell = cell_from_json(&json!([1, 2]));
        assert_eq!(cell, CellValue::Text("[1,2]".to_string()));
    }

    #[test]
    fn scalars_map_to_typed_cells() {
        assert_eq!(cell_from_json(&json!(null)), CellValue::Missing);
        assert_eq!(cell_from_json(&json!(true)), CellValue::Boolean(true));
        assert_eq!(cell_from_json(&json!(4.5)), CellValue::Number(4.5));
        assert_eq!(cell_from_json(&json!("  ")), CellValue::Missing);
    }
}
