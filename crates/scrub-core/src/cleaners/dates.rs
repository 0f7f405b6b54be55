use chrono::{NaiveDate, NaiveDateTime};

use scrub_model::{CellValue, Table};

/// Accepted date layouts, tried in order. ISO forms first, then the
/// slash and textual layouts common in exported spreadsheets.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parses a calendar date from common layouts; `None` when nothing fits.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// Coerces every cell of the date-role columns to a calendar date.
///
/// Unparsable cells become missing; cells already holding dates pass
/// through. No counts are recorded beyond the implicit missing-value
/// increase.
pub fn convert_dates(table: &mut Table, date_columns: &[String]) {
    for name in date_columns {
        let Some(column) = table.column_mut(name) else {
            continue;
        };
        for cell in &mut column.values {
            *cell = match cell {
                CellValue::Date(date) => CellValue::Date(*date),
                CellValue::Text(text) => match parse_date(text) {
                    Some(date) => CellValue::Date(date),
                    None => CellValue::Missing,
                },
                _ => CellValue::Missing,
            };
        }
    }
}
