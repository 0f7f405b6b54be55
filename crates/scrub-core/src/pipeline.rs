//! The cleaning pipeline orchestrator.
//!
//! A [`CleaningPipeline`] owns a private copy of the input table, the
//! role sets computed at construction, and the summary state every
//! stage appends to. Stages run in a fixed documented order:
//!
//! 1. **drop_empty_columns** — prune mostly-missing columns
//! 2. **convert_dates** — coerce date-role columns
//! 3. **clean_numeric_fields** — strip stray markers, refresh numeric roles
//! 4. **clean_phones** — E.164 normalization
//! 5. **validate_emails / validate_websites / validate_zip_codes** — flag columns
//! 6. **check_negative_values / detect_outliers_iqr** — non-mutating analyzers
//! 7. **clean_text_columns** — trim + title-case
//! 8. **drop_duplicates** — identifier-keyed or whole-row dedup
//!
//! [`CleaningPipeline::run`] executes all of them; callers may also
//! invoke stages individually in that order. A pipeline instance
//! processes one table and is not meant to be shared across threads.

use std::time::Instant;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use scrub_model::{CleaningReport, Role, RoleKeywords, Table};

use crate::analyzers::{check_negative_values, detect_outliers_iqr};
use crate::classifier::{RoleClassifier, RoleSets};
use crate::cleaners::{
    DEFAULT_EMPTY_THRESHOLD, clean_phones, clean_text_columns, coerce_stray_numeric_columns,
    convert_dates, drop_empty_columns, validate_emails, validate_websites, validate_zip_codes,
};
use crate::dedupe::drop_duplicates;
use crate::summary::SummaryState;

/// Pipeline configuration, overridable from external configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    /// Missing-value fraction above which a column is pruned.
    pub empty_threshold: f64,
    /// Keyword table driving column-role inference.
    pub keywords: RoleKeywords,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            empty_threshold: DEFAULT_EMPTY_THRESHOLD,
            keywords: RoleKeywords::default(),
        }
    }
}

/// Column-role-driven cleaning pipeline over one table.
pub struct CleaningPipeline {
    table: Table,
    roles: RoleSets,
    summary: SummaryState,
    options: CleanOptions,
}

impl CleaningPipeline {
    /// Builds a pipeline over a private copy of `table` with default
    /// options. The caller's table is never mutated.
    pub fn new(table: &Table) -> Self {
        Self::with_options(table, CleanOptions::default())
    }

    /// Builds a pipeline with explicit options.
    ///
    /// Roles are classified once here; nested-structure columns are
    /// flagged into the summary immediately.
    pub fn with_options(table: &Table, options: CleanOptions) -> Self {
        let table = table.clone();
        let classifier = RoleClassifier::new(options.keywords.clone());
        let roles = classifier.classify(&table);
        let mut summary = SummaryState::new(&table);
        for column in RoleClassifier::nested_columns(&table) {
            debug!(column = %column, "nested structure flagged");
            summary.record_nested_field(column);
        }
        Self {
            table,
            roles,
            summary,
            options,
        }
    }

    /// The role sets computed at construction.
    pub fn roles(&self) -> &RoleSets {
        &self.roles
    }

    /// Snapshot of the table in its current cleaning state.
    pub fn cleaned_table(&self) -> &Table {
        &self.table
    }

    /// Drops columns whose missing fraction exceeds the configured
    /// threshold. Must run before stages that assume column presence.
    pub fn drop_empty_columns(&mut self) {
        drop_empty_columns(&mut self.table, self.options.empty_threshold, &mut self.summary);
    }

    /// Coerces date-role columns to calendar dates.
    pub fn convert_dates(&mut self) {
        let columns = self.roles.get(Role::Date).to_vec();
        convert_dates(&mut self.table, &columns);
    }

    /// Coerces stray-marked text columns to numeric and refreshes the
    /// numeric role set, since column types changed.
    pub fn clean_numeric_fields(&mut self) {
        coerce_stray_numeric_columns(&mut self.table);
        self.roles.refresh_numeric(&self.table);
    }

    /// Normalizes phone-role columns to E.164.
    pub fn clean_phones(&mut self) {
        let columns = self.roles.get(Role::Phone).to_vec();
        clean_phones(&mut self.table, &columns, &mut self.summary);
    }

    /// Validates email-role columns, adding flag columns.
    pub fn validate_emails(&mut self) -> Result<()> {
        let columns = self.roles.get(Role::Email).to_vec();
        validate_emails(&mut self.table, &columns, &mut self.summary)?;
        Ok(())
    }

    /// Validates website-role columns, adding flag columns.
    pub fn validate_websites(&mut self) -> Result<()> {
        let columns = self.roles.get(Role::Website).to_vec();
        validate_websites(&mut self.table, &columns, &mut self.summary)?;
        Ok(())
    }

    /// Validates zip-role columns, adding flag columns.
    pub fn validate_zip_codes(&mut self) -> Result<()> {
        let columns = self.roles.get(Role::Zip).to_vec();
        validate_zip_codes(&mut self.table, &columns, &mut self.summary)?;
        Ok(())
    }

    /// Counts negative values per numeric-role column. Non-mutating.
    pub fn check_negative_values(&mut self) {
        let columns = self.roles.get(Role::Numeric).to_vec();
        check_negative_values(&self.table, &columns, &mut self.summary);
    }

    /// Flags IQR outliers per numeric-role column. Non-mutating.
    pub fn detect_outliers_iqr(&mut self) {
        let columns = self.roles.get(Role::Numeric).to_vec();
        detect_outliers_iqr(&self.table, &columns, &mut self.summary);
    }

    /// Trims and title-cases text-role columns.
    pub fn clean_text_columns(&mut self) {
        let columns = self.roles.get(Role::Text).to_vec();
        clean_text_columns(&mut self.table, &columns);
    }

    /// Removes duplicate rows, keyed on identifier-role columns when
    /// any survive earlier stages.
    pub fn drop_duplicates(&mut self) -> Result<()> {
        let columns = self.roles.get(Role::Identifier).to_vec();
        drop_duplicates(&mut self.table, &columns, &mut self.summary)?;
        Ok(())
    }

    /// Runs every stage in the documented order.
    pub fn run(&mut self) -> Result<()> {
        let start = Instant::now();
        let span = info_span!("clean", rows = self.summary.original_shape().rows);
        let _guard = span.enter();

        self.stage("drop_empty_columns", |pipeline| {
            pipeline.drop_empty_columns();
            Ok(())
        })?;
        self.stage("convert_dates", |pipeline| {
            pipeline.convert_dates();
            Ok(())
        })?;
        self.stage("clean_numeric_fields", |pipeline| {
            pipeline.clean_numeric_fields();
            Ok(())
        })?;
        self.stage("clean_phones", |pipeline| {
            pipeline.clean_phones();
            Ok(())
        })?;
        self.stage("validate_emails", Self::validate_emails)?;
        self.stage("validate_websites", Self::validate_websites)?;
        self.stage("validate_zip_codes", Self::validate_zip_codes)?;
        self.stage("check_negative_values", |pipeline| {
            pipeline.check_negative_values();
            Ok(())
        })?;
        self.stage("detect_outliers_iqr", |pipeline| {
            pipeline.detect_outliers_iqr();
            Ok(())
        })?;
        self.stage("clean_text_columns", |pipeline| {
            pipeline.clean_text_columns();
            Ok(())
        })?;
        self.stage("drop_duplicates", Self::drop_duplicates)?;

        info!(
            rows = self.table.height(),
            columns = self.table.width(),
            duration_ms = start.elapsed().as_millis(),
            "cleaning complete"
        );
        Ok(())
    }

    fn stage(&mut self, name: &str, run: impl FnOnce(&mut Self) -> Result<()>) -> Result<()> {
        let span = info_span!("stage", name);
        let _guard = span.enter();
        let start = Instant::now();
        run(self)?;
        debug!(
            stage = name,
            rows = self.table.height(),
            columns = self.table.width(),
            duration_ms = start.elapsed().as_millis(),
            "stage complete"
        );
        Ok(())
    }

    /// Finalizes the diagnostic report. Idempotent; call after all
    /// stages have run.
    pub fn report(&self) -> CleaningReport {
        self.summary.finalize(&self.table)
    }

    /// Consumes the pipeline, yielding the cleaned table and report.
    pub fn into_parts(self) -> (Table, CleaningReport) {
        let report = self.summary.finalize(&self.table);
        (self.table, report)
    }
}
