//! Column role inference.
//!
//! Name-derived roles come from case-insensitive keyword substring
//! matches against column names; the numeric role is read off the
//! stored value types instead. Role sets are computed once at pipeline
//! construction and re-computed only on request (after a step that
//! changes column types).

use std::collections::BTreeMap;

use serde_json::Value;

use scrub_model::{Role, RoleKeywords, Table};

/// The column sets assigned to each role.
///
/// A column may appear in several sets; a column matching no keywords
/// belongs to none and is skipped by every role-specific cleaner.
#[derive(Debug, Clone, Default)]
pub struct RoleSets {
    sets: BTreeMap<Role, Vec<String>>,
}

impl RoleSets {
    /// Columns assigned to a role, in table order.
    pub fn get(&self, role: Role) -> &[String] {
        self.sets.get(&role).map(Vec::as_slice).unwrap_or_default()
    }

    /// All roles carried by a column.
    pub fn roles_for(&self, column: &str) -> Vec<Role> {
        self.sets
            .iter()
            .filter(|(_, columns)| columns.iter().any(|name| name == column))
            .map(|(role, _)| *role)
            .collect()
    }

    /// Re-reads the numeric role set from current column types.
    ///
    /// Must be called after any step that changes a column's underlying
    /// type (numeric coercion) when later steps depend on the set.
    pub fn refresh_numeric(&mut self, table: &Table) {
        self.sets
            .insert(Role::Numeric, RoleClassifier::numeric_columns(table));
    }
}

/// Keyword-driven role classifier with an overridable keyword table.
#[derive(Debug, Clone, Default)]
pub struct RoleClassifier {
    keywords: RoleKeywords,
}

impl RoleClassifier {
    pub fn new(keywords: RoleKeywords) -> Self {
        Self { keywords }
    }

    /// Assigns every column to its matching role sets.
    pub fn classify(&self, table: &Table) -> RoleSets {
        let mut sets: BTreeMap<Role, Vec<String>> = BTreeMap::new();
        for role in Role::NAME_DERIVED {
            let matched: Vec<String> = table
                .columns()
                .iter()
                .filter(|column| self.keywords.matches(role, &column.name))
                .map(|column| column.name.clone())
                .collect();
            sets.insert(role, matched);
        }
        sets.insert(Role::Numeric, Self::numeric_columns(table));
        RoleSets { sets }
    }

    /// Columns whose stored values are numeric, by type inspection.
    pub fn numeric_columns(table: &Table) -> Vec<String> {
        table
            .columns()
            .iter()
            .filter(|column| column.is_numeric())
            .map(|column| column.name.clone())
            .collect()
    }

    /// Columns holding nested structures (JSON objects or arrays).
    pub fn nested_columns(table: &Table) -> Vec<String> {
        table
            .columns()
            .iter()
            .filter(|column| {
                column
                    .values
                    .iter()
                    .any(|cell| cell.as_text().is_some_and(looks_nested))
            })
            .map(|column| column.name.clone())
            .collect()
    }
}

fn looks_nested(text: &str) -> bool {
    let trimmed = text.trim();
    if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
        return false;
    }
    matches!(
        serde_json::from_str::<Value>(trimmed),
        Ok(Value::Object(_) | Value::Array(_))
    )
}
