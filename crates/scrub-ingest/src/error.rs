use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading a source into a table.
///
/// Ingestion failures are recoverable: they abort only the load step
/// and leave the caller free to retry with another source. They are
/// deliberately distinct from pipeline errors.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported source type: {path}")]
    Unsupported { path: PathBuf },
    #[error(transparent)]
    Model(#[from] scrub_model::ScrubError),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;
