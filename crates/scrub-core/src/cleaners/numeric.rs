use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use scrub_model::{CellValue, Table};

/// Characters that cannot appear in a parseable number.
static STRAY_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9eE.+\-]").expect("stray-char pattern"));

/// Coerces text columns carrying stray-marked numbers to numeric.
///
/// Applies to every column (not just a classified role) where some
/// text cell contains a stray `*` marker. Stray characters are
/// stripped before parsing; cells that still fail to parse become
/// missing. The caller must refresh the numeric role set afterwards.
pub fn coerce_stray_numeric_columns(table: &mut Table) {
    let targets: Vec<String> = table
        .columns()
        .iter()
        .filter(|column| {
            column
                .values
                .iter()
                .any(|cell| cell.as_text().is_some_and(|text| text.contains('*')))
        })
        .map(|column| column.name.clone())
        .collect();

    for name in &targets {
        let Some(column) = table.column_mut(name) else {
            continue;
        };
        for cell in &mut column.values {
            *cell = match cell {
                CellValue::Number(value) => CellValue::Number(*value),
                CellValue::Text(text) => match parse_stripped(text) {
                    Some(value) => CellValue::Number(value),
                    None => CellValue::Missing,
                },
                _ => CellValue::Missing,
            };
        }
        debug!(column = %name, "stray-marked column coerced to numeric");
    }
}

fn parse_stripped(text: &str) -> Option<f64> {
    let stripped = STRAY_CHARS.replace_all(text.trim(), "");
    if stripped.is_empty() {
        return None;
    }
    stripped.parse::<f64>().ok()
}
