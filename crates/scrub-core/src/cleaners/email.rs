use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use scrub_model::{CellValue, Result, Table};

use crate::cleaners::{flag_column_name, set_flag_column};
use crate::summary::SummaryState;

/// Strict syntax: local part, `@`, domain with at least one dot, and
/// no whitespace anywhere.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

fn is_valid_email(raw: &str) -> bool {
    EMAIL_PATTERN.is_match(raw.trim())
}

/// Adds a `Valid <col>` flag column per email-role column.
///
/// Two invalidity criteria are recorded separately: the heuristic
/// pre-check (cell lacks an `@`) and the strict-syntax validator that
/// drives the flag column. They are different measures and both
/// surface in the report.
pub fn validate_emails(
    table: &mut Table,
    email_columns: &[String],
    summary: &mut SummaryState,
) -> Result<()> {
    for name in email_columns {
        let Some(column) = table.column(name) else {
            continue;
        };
        let mut original_invalid = 0u64;
        let mut remaining_invalid = 0u64;
        let flags: Vec<CellValue> = column
            .values
            .iter()
            .map(|cell| {
                let text = cell.display_string();
                if !text.contains('@') {
                    original_invalid += 1;
                }
                let valid = is_valid_email(&text);
                if !valid {
                    remaining_invalid += 1;
                }
                CellValue::Boolean(valid)
            })
            .collect();
        let flag_name = flag_column_name(name);
        set_flag_column(table, &flag_name, flags)?;
        debug!(
            column = %name,
            original_invalid,
            remaining_invalid,
            "email column validated"
        );
        summary.record_validation_flag(flag_name);
        summary.record_field_counts(format!("Emails in {name}"), original_invalid, remaining_invalid);
    }
    Ok(())
}
