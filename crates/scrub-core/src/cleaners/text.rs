use scrub_model::{CellValue, Table};

/// Trims and title-cases a string: each alphabetic run starts with an
/// uppercase letter, the rest are lowered. Internal whitespace is kept.
fn normalize_text(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut inside_word = false;
    for ch in raw.trim().chars() {
        if ch.is_alphabetic() {
            if inside_word {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            inside_word = true;
        } else {
            result.push(ch);
            inside_word = false;
        }
    }
    result
}

/// Normalizes text-role columns: string cells are trimmed and
/// title-cased; every other cell (missing included) passes through.
pub fn clean_text_columns(table: &mut Table, text_columns: &[String]) {
    for name in text_columns {
        let Some(column) = table.column_mut(name) else {
            continue;
        };
        for cell in &mut column.values {
            if let CellValue::Text(text) = cell {
                *cell = CellValue::Text(normalize_text(text));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{clean_text_columns, normalize_text};
    use scrub_model::{CellValue, Column, Table};

    #[test]
    fn trims_and_title_cases() {
        assert_eq!(normalize_text("  new york  "), "New York");
        assert_eq!(normalize_text("BOSTON"), "Boston");
        assert_eq!(normalize_text("o'brien"), "O'Brien");
        assert_eq!(normalize_text("ward-7 east"), "Ward-7 East");
    }

    #[test]
    fn non_string_cells_pass_through() {
        let mut table = Table::from_columns(vec![Column::new(
            "City",
            vec![
                CellValue::Text(" springfield ".into()),
                CellValue::Number(3.0),
                CellValue::Missing,
            ],
        )])
        .unwrap();
        clean_text_columns(&mut table, &["City".to_string()]);
        let column = table.column("City").unwrap();
        assert_eq!(column.values[0], CellValue::Text("Springfield".into()));
        assert_eq!(column.values[1], CellValue::Number(3.0));
        assert_eq!(column.values[2], CellValue::Missing);
    }
}
