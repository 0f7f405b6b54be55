use std::path::PathBuf;

use scrub_model::CleaningReport;

#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub cleaned_path: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub report: CleaningReport,
}
