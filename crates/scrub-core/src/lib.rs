//! Column-role-driven table cleaning.
//!
//! The core of the system: a [`CleaningPipeline`] infers semantic
//! roles from column names, applies per-role cleaning and validation
//! with before/after tracking, runs quality analyzers and row
//! deduplication, and finalizes a typed diagnostic report.
//!
//! Per-cell parse and validation failures never escape the pipeline;
//! they degrade to missing values or `false` validation flags and are
//! surfaced only through summary counts.

pub mod analyzers;
pub mod classifier;
pub mod cleaners;
pub mod dedupe;
pub mod pipeline;
pub mod summary;

pub use classifier::{RoleClassifier, RoleSets};
pub use pipeline::{CleanOptions, CleaningPipeline};
pub use summary::SummaryState;
