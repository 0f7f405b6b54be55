use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;

use scrub_cli::pipeline::{CleanConfig, load_options, run_clean as run_clean_pipeline};
use scrub_core::RoleClassifier;

use crate::cli::{CleanArgs, RolesArgs};
use crate::summary::apply_table_style;
use crate::types::CleanResult;

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let options = load_options(args.options.as_deref(), args.threshold)?;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.input));
    let config = CleanConfig {
        input: args.input.clone(),
        output_dir: output_dir.clone(),
        options,
        dry_run: args.dry_run,
    };
    let outcome = run_clean_pipeline(&config)?;
    Ok(CleanResult {
        input: args.input.clone(),
        output_dir,
        cleaned_path: outcome.cleaned_path,
        report_path: outcome.report_path,
        report: outcome.report,
    })
}

pub fn run_roles(args: &RolesArgs) -> Result<()> {
    let options = load_options(args.options.as_deref(), None)?;
    let table = scrub_ingest::read_table(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    let roles = RoleClassifier::new(options.keywords).classify(&table);

    let mut listing = Table::new();
    listing.set_header(vec!["Column", "Roles"]);
    apply_table_style(&mut listing);
    for name in table.column_names() {
        let labels: Vec<&str> = roles
            .roles_for(&name)
            .into_iter()
            .map(|role| role.label())
            .collect();
        let rendered = if labels.is_empty() {
            "-".to_string()
        } else {
            labels.join(", ")
        };
        listing.add_row(vec![name, rendered]);
    }
    println!("{listing}");
    Ok(())
}

fn default_output_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join("output"),
        _ => PathBuf::from("output"),
    }
}
