//! Table ingestion: thin I/O glue that turns CSV or JSON sources into
//! an in-memory [`scrub_model::Table`].
//!
//! Format parsing stays out of the cleaning core; a failure here is a
//! recoverable [`IngestError`] that aborts only the load step.

mod csv_table;
mod error;
mod json_table;

use std::path::Path;

pub use csv_table::read_csv_table;
pub use error::{IngestError, Result};
pub use json_table::read_json_table;

use scrub_model::Table;

/// Loads a table, dispatching on the file extension (`.csv`, `.json`).
pub fn read_table(path: &Path) -> Result<Table> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);
    match extension.as_deref() {
        Some("csv") => read_csv_table(path),
        Some("json") => read_json_table(path),
        _ => Err(IngestError::Unsupported {
            path: path.to_path_buf(),
        }),
    }
}
