//! Row-level duplicate removal.

use std::collections::BTreeSet;

use tracing::debug;

use scrub_model::{Result, Table};

use crate::summary::SummaryState;

/// Drops duplicate rows, keeping the first occurrence.
///
/// When identifier-role columns exist in the table, rows duplicate on
/// their combination; otherwise rows must be fully identical across
/// all columns. The dropped count is recorded in the summary.
pub fn drop_duplicates(
    table: &mut Table,
    identifier_columns: &[String],
    summary: &mut SummaryState,
) -> Result<()> {
    let before = table.height();
    if before == 0 {
        return Ok(());
    }
    let keys: Vec<String> = identifier_columns
        .iter()
        .filter(|name| table.has_column(name))
        .cloned()
        .collect();
    let key_columns = if keys.is_empty() {
        table.column_names()
    } else {
        keys
    };

    // Keys stay a Vec of per-column values; joining them into one
    // string would let values containing the separator collide.
    let mut seen: BTreeSet<Vec<String>> = BTreeSet::new();
    let mut keep = Vec::with_capacity(before);
    for idx in 0..before {
        let key: Vec<String> = key_columns
            .iter()
            .map(|name| {
                table
                    .cell(name, idx)
                    .map(|cell| cell.display_string().trim().to_string())
                    .unwrap_or_default()
            })
            .collect();
        keep.push(seen.insert(key));
    }
    table.filter_rows(&keep)?;
    let dropped = before - table.height();
    if dropped > 0 {
        debug!(dropped, keyed = %key_columns.join(","), "duplicate rows removed");
    }
    summary.record_duplicates_dropped(dropped);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::drop_duplicates;
    use crate::summary::SummaryState;
    use scrub_model::{CellValue, Column, Table};

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    #[test]
    fn keys_on_identifier_columns_when_present() {
        let mut table = Table::from_columns(vec![
            Column::new("Patient ID", vec![text("P1"), text("P1"), text("P2")]),
            Column::new("City", vec![text("Boston"), text("Austin"), text("Reno")]),
        ])
        .unwrap();
        let mut summary = SummaryState::new(&table);
        drop_duplicates(&mut table, &["Patient ID".to_string()], &mut summary).unwrap();
        assert_eq!(table.height(), 2);
        // First occurrence wins.
        assert_eq!(table.cell("City", 0), Some(&text("Boston")));
        let report = summary.finalize(&table);
        assert_eq!(report.duplicate_rows_dropped, 1);
    }

    #[test]
    fn separator_characters_do_not_collide_keys() {
        let mut table = Table::from_columns(vec![
            Column::new("Case ID", vec![text("x|"), text("x")]),
            Column::new("Record ID", vec![text("y"), text("|y")]),
        ])
        .unwrap();
        let mut summary = SummaryState::new(&table);
        drop_duplicates(
            &mut table,
            &["Case ID".to_string(), "Record ID".to_string()],
            &mut summary,
        )
        .unwrap();
        // ("x|","y") and ("x","|y") are distinct key combinations.
        assert_eq!(table.height(), 2);
        assert_eq!(summary.finalize(&table).duplicate_rows_dropped, 0);
    }

    #[test]
    fn falls_back_to_whole_row_identity() {
        let mut table = Table::from_columns(vec![
            Column::new("a", vec![text("x"), text("x"), text("x")]),
            Column::new("b", vec![text("1"), text("1"), text("2")]),
        ])
        .unwrap();
        let mut summary = SummaryState::new(&table);
        drop_duplicates(&mut table, &[], &mut summary).unwrap();
        assert_eq!(table.height(), 2);
    }

    #[test]
    fn missing_identifier_columns_are_ignored() {
        let mut table = Table::from_columns(vec![Column::new(
            "a",
            vec![text("x"), text("x")],
        )])
        .unwrap();
        let mut summary = SummaryState::new(&table);
        // "Record ID" was pruned earlier; dedupe falls back to full rows.
        drop_duplicates(&mut table, &["Record ID".to_string()], &mut summary).unwrap();
        assert_eq!(table.height(), 1);
    }
}
