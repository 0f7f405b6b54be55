use tracing::debug;
use url::Url;

use scrub_model::{CellValue, Result, Table};

use crate::cleaners::{flag_column_name, set_flag_column};
use crate::summary::SummaryState;

/// Full URL syntax: must parse with a scheme and carry a host.
fn is_valid_url(raw: &str) -> bool {
    match Url::parse(raw.trim()) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}

/// Adds a `Valid <col>` flag column per website-role column.
///
/// The heuristic pre-check counts cells that do not start with "http";
/// the flag column comes from the full URL parser.
pub fn validate_websites(
    table: &mut Table,
    website_columns: &[String],
    summary: &mut SummaryState,
) -> Result<()> {
    for name in website_columns {
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
                if !text.trim().starts_with("http") {
                    original_invalid += 1;
                }
                let valid = is_valid_url(&text);
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
            "website column validated"
        );
        summary.record_validation_flag(flag_name);
        summary.record_field_counts(format!("URLs in {name}"), original_invalid, remaining_invalid);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{is_valid_url, validate_websites};
    use crate::summary::SummaryState;
    use scrub_model::{CellValue, Column, Table};

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    #[test]
    fn url_validity_needs_scheme_and_host() {
        assert!(is_valid_url("https://example.com/page"));
        assert!(is_valid_url("http://example.com"));
        assert!(!is_valid_url("example.com")); // no scheme
        assert!(!is_valid_url("mailto:user@example.com")); // no host
        assert!(!is_valid_url("not a url"));
    }

    #[test]
    fn flag_column_tracks_parser_validity() {
        let mut table = Table::from_columns(vec![Column::new(
            "Website",
            vec![
                text("https://example.com"),
                text("example.com"),
                CellValue::Missing,
            ],
        )])
        .unwrap();
        let mut summary = SummaryState::new(&table);
        validate_websites(&mut table, &["Website".to_string()], &mut summary).unwrap();

        let flags = table.column("Valid Website").unwrap();
        assert_eq!(flags.values[0], CellValue::Boolean(true));
        assert_eq!(flags.values[1], CellValue::Boolean(false));
        assert_eq!(flags.values[2], CellValue::Boolean(false));

        let report = summary.finalize(&table);
        let health = report.health_for("URLs in Website").unwrap();
        assert_eq!(health.before, 2);
        assert_eq!(health.after, 2);
    }
}
