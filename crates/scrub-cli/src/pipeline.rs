//! Stage functions for the `clean` command: load, clean, write.
//!
//! Kept in the library so integration tests can drive a full run
//! without spawning the binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace};

use scrub_core::{CleanOptions, CleaningPipeline};
use scrub_model::{CleaningReport, Table};
use scrub_report::{write_cleaned_csv, write_report_json};

use crate::logging::redact_value;

/// Configuration for one cleaning run.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    /// Input file (`.csv` or `.json`).
    pub input: PathBuf,
    /// Directory receiving the cleaned CSV and the JSON report.
    pub output_dir: PathBuf,
    /// Pipeline options.
    pub options: CleanOptions,
    /// Clean and report without writing output files.
    pub dry_run: bool,
}

/// Artifacts of one cleaning run.
#[derive(Debug)]
pub struct CleanOutcome {
    /// Path of the cleaned CSV (absent on dry runs).
    pub cleaned_path: Option<PathBuf>,
    /// Path of the JSON report (absent on dry runs).
    pub report_path: Option<PathBuf>,
    /// The finalized diagnostic report.
    pub report: CleaningReport,
}

/// Loads pipeline options, layering an options file under a threshold
/// override.
pub fn load_options(options_file: Option<&Path>, threshold: Option<f64>) -> Result<CleanOptions> {
    let mut options = match options_file {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("read options file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parse options file {}", path.display()))?
        }
        None => CleanOptions::default(),
    };
    if let Some(threshold) = threshold {
        options.empty_threshold = threshold;
    }
    Ok(options)
}

/// Runs the full pipeline over one input file and writes both
/// artifacts next to each other in the output directory.
pub fn run_clean(config: &CleanConfig) -> Result<CleanOutcome> {
    let span = info_span!("run", input = %config.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = scrub_ingest::read_table(&config.input)
        .with_context(|| format!("load {}", config.input.display()))?;
    info!(
        rows = table.height(),
        columns = table.width(),
        "input loaded"
    );

    let mut pipeline = CleaningPipeline::with_options(&table, config.options.clone());
    pipeline.run()?;
    let (cleaned, report) = pipeline.into_parts();
    log_row_sample(&cleaned);

    let (cleaned_path, report_path) = if config.dry_run {
        (None, None)
    } else {
        let stem = input_stem(&config.input);
        let cleaned_path = config.output_dir.join(format!("{stem}_cleaned.csv"));
        let report_path = config.output_dir.join(format!("{stem}_report.json"));
        write_cleaned_csv(&cleaned_path, &cleaned)?;
        write_report_json(&report_path, &report)?;
        (Some(cleaned_path), Some(report_path))
    };

    info!(
        rows = report.final_shape.rows,
        columns = report.final_shape.columns,
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );
    Ok(CleanOutcome {
        cleaned_path,
        report_path,
        report,
    })
}

/// Trace-level preview of the first cleaned row. Cell values pass
/// through the redaction gate unless --log-data was given.
fn log_row_sample(table: &Table) {
    if table.is_empty() {
        return;
    }
    let preview: Vec<String> = table
        .columns()
        .iter()
        .map(|column| column.values[0].display_string())
        .collect();
    trace!(sample = %redact_value(&preview.join("|")), "first cleaned row");
}

fn input_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("table")
        .to_string()
}
