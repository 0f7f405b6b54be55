//! CLI library components for the cleaning pipeline.

pub mod logging;
pub mod pipeline;
