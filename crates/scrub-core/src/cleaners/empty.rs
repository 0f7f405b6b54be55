use tracing::debug;

use scrub_model::Table;

use crate::summary::SummaryState;

/// Default missing-value fraction above which a column is pruned.
pub const DEFAULT_EMPTY_THRESHOLD: f64 = 0.9;

/// Drops columns whose missing fraction exceeds the threshold.
///
/// Must run before any step that assumes the column still exists.
pub fn drop_empty_columns(table: &mut Table, threshold: f64, summary: &mut SummaryState) {
    let to_drop: Vec<String> = table
        .columns()
        .iter()
        .filter(|column| column.missing_fraction() > threshold)
        .map(|column| column.name.clone())
        .collect();
    for name in to_drop {
        table.drop_column(&name);
        debug!(column = %name, threshold, "empty column dropped");
        summary.record_removed_column(name);
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_EMPTY_THRESHOLD, drop_empty_columns};
    use crate::summary::SummaryState;
    use scrub_model::{CellValue, Column, Table};

    #[test]
    fn drops_columns_above_threshold_only() {
        let mostly_empty: Vec<CellValue> = (0..10)
            .map(|idx| {
                if idx == 0 {
                    CellValue::Text("only".into())
                } else {
                    CellValue::Missing
                }
            })
            .collect();
        let half_empty: Vec<CellValue> = (0..10)
            .map(|idx| {
                if idx < 5 {
                    CellValue::Text("v".into())
                } else {
                    CellValue::Missing
                }
            })
            .collect();
        let mut table = Table::from_columns(vec![
            Column::new("sparse", mostly_empty),
            Column::new("dense", half_empty),
        ])
        .unwrap();
        let mut summary = SummaryState::new(&table);
        drop_empty_columns(&mut table, DEFAULT_EMPTY_THRESHOLD, &mut summary);
        assert!(!table.has_column("sparse"));
        assert!(table.has_column("dense"));
        let report = summary.finalize(&table);
        assert_eq!(report.columns_removed, ["sparse"]);
    }
}
