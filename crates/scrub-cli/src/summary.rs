use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use std::collections::BTreeSet;

use scrub_model::CleaningReport;

use crate::types::CleanResult;

pub fn print_summary(result: &CleanResult) {
    let report = &result.report;
    println!("Input: {}", result.input.display());
    if let Some(path) = &result.cleaned_path {
        println!("Cleaned: {}", path.display());
    }
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
    println!(
        "Rows: {} -> {} (dropped {}, {}%; {} duplicates)",
        report.original_shape.rows,
        report.final_shape.rows,
        report.rows_dropped,
        report.percent_rows_dropped,
        report.duplicate_rows_dropped,
    );
    println!(
        "Columns: {} -> {}",
        report.original_shape.columns, report.final_shape.columns
    );
    print_name_list("Columns removed", &report.columns_removed);
    print_name_list("Validations added", &report.validations_added);
    print_name_list("Nested fields flagged", &report.nested_fields_flagged);

    print_field_health(report);
    print_quality(report);
}

fn print_name_list(label: &str, names: &[String]) {
    if !names.is_empty() {
        println!("{label}: {}", names.join(", "));
    }
}

fn print_field_health(report: &CleaningReport) {
    if report.field_health.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Invalid Before"),
        header_cell("Invalid After"),
        header_cell("% of Rows"),
        header_cell("% Improvement"),
    ]);
    apply_table_style(&mut table);
    for index in 1..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for entry in &report.field_health {
        table.add_row(vec![
            Cell::new(&entry.field),
            count_cell(entry.before, Color::Yellow),
            count_cell(entry.after, Color::Red),
            Cell::new(format!("{}%", entry.percent_of_rows)),
            Cell::new(format!("{}%", entry.percent_improvement)),
        ]);
    }
    println!();
    println!("Field health:");
    println!("{table}");
}

fn print_quality(report: &CleaningReport) {
    if report.negative_values.is_empty() && report.outliers.per_column.is_empty() {
        return;
    }
    let mut columns: BTreeSet<&String> = report.negative_values.keys().collect();
    columns.extend(report.outliers.per_column.keys());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Negatives"),
        header_cell("Outliers"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for name in columns {
        let negatives = report.negative_values.get(name).copied().unwrap_or(0);
        let outliers = report.outliers.per_column.get(name).copied().unwrap_or(0);
        table.add_row(vec![
            Cell::new(name),
            count_cell(negatives, Color::Red),
            count_cell(outliers, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(report.outliers.total, Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!();
    println!("Numeric quality:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: u64, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
