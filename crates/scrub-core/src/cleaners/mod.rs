//! Field cleaners: independent, idempotent per-role transformations.
//!
//! Every cleaner follows the same contract: it takes the table plus a
//! role's column set, mutates or adds columns in place, and records
//! before/after counts in the summary state. A cell that fails to
//! parse never aborts its column; it degrades to a missing value or a
//! `false` validation flag and is tallied.

mod dates;
mod email;
mod empty;
mod numeric;
mod phone;
mod text;
mod website;
mod zip;

pub use dates::{convert_dates, parse_date};
pub use email::validate_emails;
pub use empty::{DEFAULT_EMPTY_THRESHOLD, drop_empty_columns};
pub use numeric::coerce_stray_numeric_columns;
pub use phone::clean_phones;
pub use text::clean_text_columns;
pub use website::validate_websites;
pub use zip::validate_zip_codes;

use tracing::debug;

use scrub_model::{CellValue, Column, Result, Table};

/// Writes a boolean validation-flag column, overwriting any existing
/// column of the same name so validators stay idempotent.
pub(crate) fn set_flag_column(
    table: &mut Table,
    name: &str,
    flags: Vec<CellValue>,
) -> Result<()> {
    if let Some(column) = table.column_mut(name) {
        let was_flags = column
            .values
            .iter()
            .all(|cell| matches!(cell, CellValue::Boolean(_)));
        if !was_flags {
            debug!(column = %name, "input column shadowed by validation flags");
        }
        column.values = flags;
        Ok(())
    } else {
        table.push_column(Column::new(name, flags))
    }
}

/// Flag-column name for a validated source column.
pub(crate) fn flag_column_name(source: &str) -> String {
    format!("Valid {source}")
}
