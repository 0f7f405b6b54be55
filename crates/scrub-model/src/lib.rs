//! Data model for the table cleaning pipeline.
//!
//! Defines the owned [`Table`] of typed nullable cells, the semantic
//! [`Role`] sets inferred for columns, and the typed [`CleaningReport`]
//! produced by the pipeline.

mod error;
mod report;
mod role;
mod table;

pub use error::{Result, ScrubError};
pub use report::{CleaningReport, FieldHealth, OutlierSummary, TableShape};
pub use role::{Role, RoleKeywords};
pub use table::{CellValue, Column, Table, format_numeric};
