use phonenumber::Mode;
use tracing::debug;

use scrub_model::{CellValue, Table, format_numeric};

use crate::summary::SummaryState;

/// Parses an international phone number (no default region) and
/// returns its E.164 form when the parsed number is valid.
fn parse_e164(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let number = phonenumber::parse(None, trimmed).ok()?;
    phonenumber::is_valid(&number).then(|| number.format().mode(Mode::E164).to_string())
}

/// Normalizes phone-role columns to E.164.
///
/// Valid numbers are rewritten as `+<country><national>`; invalid or
/// empty cells become missing. Records the pre-clean invalid count and
/// the post-clean remaining-invalid count (computed against the
/// rewritten column, never assumed).
pub fn clean_phones(table: &mut Table, phone_columns: &[String], summary: &mut SummaryState) {
    for name in phone_columns {
        let Some(column) = table.column_mut(name) else {
            continue;
        };
        let mut original_invalid = 0u64;
        for cell in &mut column.values {
            let normalized = match &*cell {
                CellValue::Text(text) => parse_e164(text),
                CellValue::Number(value) => parse_e164(&format_numeric(*value)),
                _ => None,
            };
            match normalized {
                Some(e164) => *cell = CellValue::Text(e164),
                None => {
                    original_invalid += 1;
                    *cell = CellValue::Missing;
                }
            }
        }
        let remaining_invalid = column
            .values
            .iter()
            .filter(|cell| match cell {
                CellValue::Text(text) => parse_e164(text).is_none(),
                CellValue::Missing => false,
                _ => true,
            })
            .count() as u64;
        debug!(
            column = %name,
            original_invalid,
            remaining_invalid,
            "phone column normalized"
        );
        summary.record_field_counts(format!("Phones in {name}"), original_invalid, remaining_invalid);
    }
}

#[cfg(test)]
mod tests {
    use super::{clean_phones, parse_e164};
    use crate::summary::SummaryState;
    use scrub_model::{CellValue, Column, Table};

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    #[test]
    fn valid_numbers_format_as_e164() {
        assert_eq!(
            parse_e164("+1 415 555 2671"),
            Some("+14155552671".to_string())
        );
        assert_eq!(parse_e164("not-a-phone"), None);
        assert_eq!(parse_e164(""), None);
        // No default region: a national-format number cannot be parsed.
        assert_eq!(parse_e164("(415) 555-2671"), None);
    }

    #[test]
    fn invalid_cells_become_missing_and_are_counted() {
        let mut table = Table::from_columns(vec![Column::new(
            "Contact Number",
            vec![
                text("+1 (415) 555-2671"),
                text("not-a-phone"),
                CellValue::Missing,
            ],
        )])
        .unwrap();
        let mut summary = SummaryState::new(&table);
        clean_phones(
            &mut table,
            &["Contact Number".to_string()],
            &mut summary,
        );
        let column = table.column("Contact Number").unwrap();
        assert_eq!(column.values[0], text("+14155552671"));
        assert_eq!(column.values[1], CellValue::Missing);
        assert_eq!(column.values[2], CellValue::Missing);

        let report = summary.finalize(&table);
        let health = report.health_for("Phones in Contact Number").unwrap();
        assert_eq!(health.before, 2);
        assert_eq!(health.after, 0);
    }

    #[test]
    fn normalization_is_idempotent() {
        let cells = vec![text("+14155552671"), text("junk"), CellValue::Missing];
        let mut table =
            Table::from_columns(vec![Column::new("Phone", cells)]).unwrap();
        let mut summary = SummaryState::new(&table);
        clean_phones(&mut table, &["Phone".to_string()], &mut summary);
        let once = table.column("Phone").unwrap().values.clone();
        clean_phones(&mut table, &["Phone".to_string()], &mut summary);
        assert_eq!(table.column("Phone").unwrap().values, once);
    }
}
