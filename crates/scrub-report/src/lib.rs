//! Output writers for cleaning runs.
//!
//! Two artifacts per run: the cleaned table as CSV and the diagnostic
//! report as pretty-printed JSON. Both writers create parent
//! directories as needed and overwrite existing files.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use scrub_model::{CleaningReport, Table};

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}

/// Writes the cleaned table as CSV.
///
/// Cells render in their canonical display form: missing cells as
/// empty fields, numbers without trailing zeros, dates as ISO 8601.
pub fn write_cleaned_csv(output_path: &Path, table: &Table) -> Result<()> {
    ensure_parent_dir(output_path)?;
    let file =
        File::create(output_path).with_context(|| format!("create {}", output_path.display()))?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));
    writer.write_record(table.column_names())?;
    for row in 0..table.height() {
        let record: Vec<String> = table
            .columns()
            .iter()
            .map(|column| column.values[row].display_string())
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    info!(
        path = %output_path.display(),
        rows = table.height(),
        columns = table.width(),
        "cleaned table written"
    );
    Ok(())
}

/// Writes the diagnostic report as pretty-printed JSON.
pub fn write_report_json(output_path: &Path, report: &CleaningReport) -> Result<()> {
    ensure_parent_dir(output_path)?;
    let file =
        File::create(output_path).with_context(|| format!("create {}", output_path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)
        .with_context(|| format!("write {}", output_path.display()))?;
    info!(path = %output_path.display(), "report written");
    Ok(())
}
