//! CLI argument definitions for the cleaning pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "scrub",
    version,
    about = "Clean messy tabular exports by column role",
    long_about = "Clean messy CSV or JSON exports.\n\n\
                  Column roles are inferred from column names; each role gets its\n\
                  own cleaning or validation pass, and every run produces a cleaned\n\
                  CSV plus a JSON diagnostic report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow cell values in trace logs.
    ///
    /// Off by default: inputs routinely carry names, phone numbers and
    /// emails, so row-level log output is redacted unless explicitly
    /// requested.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean an input file and write the cleaned CSV plus JSON report.
    Clean(CleanArgs),

    /// Show the roles inferred for each column of an input file.
    Roles(RolesArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Input file (.csv or .json).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory (default: <INPUT dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON options file overriding the built-in role keywords and
    /// empty-column threshold.
    #[arg(long = "options", value_name = "PATH")]
    pub options: Option<PathBuf>,

    /// Missing-value fraction above which a column is dropped
    /// (overrides the options file).
    #[arg(long = "threshold", value_name = "FRACTION")]
    pub threshold: Option<f64>,

    /// Clean and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct RolesArgs {
    /// Input file (.csv or .json).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// JSON options file overriding the built-in role keywords.
    #[arg(long = "options", value_name = "PATH")]
    pub options: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
