use tracing::debug;

use scrub_model::{CellValue, Result, Table};

use crate::cleaners::{flag_column_name, set_flag_column};
use crate::summary::SummaryState;

/// Exactly five decimal digits; no ZIP+4 extension.
fn is_valid_zip(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.len() == 5 && trimmed.bytes().all(|byte| byte.is_ascii_digit())
}

/// Adds a `Valid <col>` flag column per zip-role column.
///
/// The same five-digit criterion drives both the before and after
/// counts; both are still reported.
pub fn validate_zip_codes(
    table: &mut Table,
    zip_columns: &[String],
    summary: &mut SummaryState,
) -> Result<()> {
    for name in zip_columns {
        let Some(column) = table.column(name) else {
            continue;
        };
        let mut invalid = 0u64;
        let flags: Vec<CellValue> = column
            .values
            .iter()
            .map(|cell| {
                let valid = is_valid_zip(&cell.display_string());
                if !valid {
                    invalid += 1;
                }
                CellValue::Boolean(valid)
            })
            .collect();
        let flag_name = flag_column_name(name);
        set_flag_column(table, &flag_name, flags)?;
        debug!(column = %name, invalid, "zip column validated");
        summary.record_validation_flag(flag_name);
        summary.record_field_counts(format!("ZIPs in {name}"), invalid, invalid);
    }
    Ok(())
}
