use chrono::NaiveDate;
use proptest::prelude::*;

use scrub_core::{CleanOptions, CleaningPipeline};
use scrub_model::{CellValue, Column, Role, Table};

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

/// A clinic export with every problem class the pipeline handles:
/// a duplicate record, a fully empty column, stray numeric markers,
/// mixed-validity phones/emails/websites/zips, sloppy dates and
/// casing, a negative value, outliers, and one nested-JSON cell.
fn clinic_table() -> Table {
    Table::from_columns(vec![
        Column::new(
            "Patient ID",
            vec![
                text("P1"),
                text("P2"),
                text("P2"),
                text("P3"),
                text("P4"),
                text("P5"),
            ],
        ),
        Column::new(
            "Doctor Name",
            vec![
                text(" sarah o'brien "),
                text("JOHN SMITH"),
                text("jane doe"),
                CellValue::Missing,
                text("ana maria"),
                text("lee wong"),
            ],
        ),
        Column::new(
            "Contact Number",
            vec![
                text("+1 415 555 2671"),
                text("junk"),
                CellValue::Missing,
                text("(415) 555-2671"),
                text("+14155552671"),
                text("+1 (415) 555-2671"),
            ],
        ),
        Column::new(
            "Email",
            vec![
                text("ana@clinic.org"),
                text("bad"),
                text("b@c"),
                CellValue::Missing,
                text("d@e.com"),
                text("f@g.io"),
            ],
        ),
        Column::new(
            "Website",
            vec![
                text("https://clinic.org"),
                text("clinic.org"),
                CellValue::Missing,
                text("http://example.com/x"),
                text("https://x.io"),
                text("nope"),
            ],
        ),
        Column::new(
            "Zip Code",
            vec![
                text("02139"),
                text("1234"),
                CellValue::Missing,
                text("94103"),
                text("123456"),
                text("02139"),
            ],
        ),
        Column::new(
            "Admission Date",
            vec![
                text("2024-03-05"),
                text("03/06/2024"),
                text("n/a"),
                CellValue::Missing,
                text("2024/03/07"),
                text("5-Mar-2024"),
            ],
        ),
        Column::new(
            "Age",
            vec![
                CellValue::Number(30.0),
                CellValue::Number(32.0),
                CellValue::Number(35.0),
                CellValue::Number(-4.0),
                CellValue::Number(29.0),
                CellValue::Number(500.0),
            ],
        ),
        Column::new(
            "Dosage",
            vec![
                text("120*"),
                text("80"),
                text("n/a"),
                text("95"),
                text("110"),
                text("100"),
            ],
        ),
        Column::new(
            "Legacy Notes",
            vec![CellValue::Missing; 6],
        ),
        Column::new(
            "Visit Payload",
            vec![
                text("{\"visits\": [1, 2]}"),
                text("none"),
                text("none"),
                text("none"),
                text("none"),
                text("none"),
            ],
        ),
    ])
    .unwrap()
}

#[test]
fn full_run_cleans_and_reports() {
    let input = clinic_table();
    let mut pipeline = CleaningPipeline::new(&input);
    pipeline.run().unwrap();

    // The caller's table is untouched.
    assert_eq!(input.height(), 6);
    assert!(input.has_column("Legacy Notes"));

    let (table, report) = pipeline.into_parts();

    // One duplicate row and the fully empty column are gone; three
    // validation flags were added.
    assert_eq!(report.original_shape.rows, 6);
    assert_eq!(report.original_shape.columns, 11);
    assert_eq!(report.final_shape.rows, 5);
    assert_eq!(report.final_shape.columns, 13);
    assert_eq!(report.rows_dropped, 1);
    assert_eq!(report.percent_rows_dropped, 16.67);
    assert_eq!(report.duplicate_rows_dropped, 1);
    assert_eq!(report.columns_removed, ["Legacy Notes"]);
    assert_eq!(
        report.validations_added,
        ["Valid Email", "Valid Website", "Valid Zip Code"]
    );
    assert_eq!(report.nested_fields_flagged, ["Visit Payload"]);

    // Age carries one negative and two IQR outliers; the coerced
    // Dosage column stays inside its fences.
    assert_eq!(report.negative_values.get("Age"), Some(&1));
    assert_eq!(report.outliers.per_column.get("Age"), Some(&2));
    assert!(!report.outliers.per_column.contains_key("Dosage"));
    assert_eq!(report.outliers.total, 2);

    // Phones: three unparseable cells before, none after rewriting.
    let phones = report.health_for("Phones in Contact Number").unwrap();
    assert_eq!(phones.before, 3);
    assert_eq!(phones.after, 0);
    assert_eq!(phones.percent_improvement, 100.0);

    // Emails: the heuristic and strict criteria disagree on "b@c".
    let emails = report.health_for("Emails in Email").unwrap();
    assert_eq!(emails.before, 2);
    assert_eq!(emails.after, 3);

    let urls = report.health_for("URLs in Website").unwrap();
    assert_eq!(urls.before, 3);
    assert_eq!(urls.after, 3);

    let zips = report.health_for("ZIPs in Zip Code").unwrap();
    assert_eq!(zips.before, 3);
    assert_eq!(zips.after, 3);

    // Cell-level spot checks on the cleaned table. Row 2 is the
    // original row 3 (the second "P2" was dropped).
    assert_eq!(table.cell("Doctor Name", 0), Some(&text("Sarah O'Brien")));
    assert_eq!(table.cell("Doctor Name", 1), Some(&text("John Smith")));
    assert_eq!(table.cell("Contact Number", 0), Some(&text("+14155552671")));
    assert_eq!(table.cell("Contact Number", 2), Some(&CellValue::Missing));
    assert_eq!(
        table.cell("Admission Date", 0),
        Some(&CellValue::Date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()))
    );
    assert_eq!(table.cell("Dosage", 0), Some(&CellValue::Number(120.0)));
    assert_eq!(table.cell("Valid Email", 1), Some(&CellValue::Boolean(false)));
    assert_eq!(table.cell("Valid Zip Code", 0), Some(&CellValue::Boolean(true)));
}

#[test]
fn roles_are_classified_at_construction() {
    let pipeline = CleaningPipeline::new(&clinic_table());
    let roles = pipeline.roles();
    assert_eq!(roles.get(Role::Identifier), ["Patient ID"]);
    assert_eq!(roles.get(Role::Phone), ["Contact Number"]);
    assert_eq!(roles.get(Role::Email), ["Email"]);
    assert_eq!(roles.get(Role::Website), ["Website"]);
    assert_eq!(roles.get(Role::Zip), ["Zip Code"]);
    assert_eq!(roles.get(Role::Date), ["Admission Date"]);
    assert_eq!(roles.get(Role::Text), ["Doctor Name"]);
    assert_eq!(roles.get(Role::Numeric), ["Age"]);
}

#[test]
fn stray_coercion_widens_the_numeric_role() {
    let mut pipeline = CleaningPipeline::new(&clinic_table());
    pipeline.clean_numeric_fields();
    assert_eq!(pipeline.roles().get(Role::Numeric), ["Age", "Dosage"]);
}

#[test]
fn empty_input_yields_an_empty_report() {
    let mut pipeline = CleaningPipeline::new(&Table::new());
    pipeline.run().unwrap();
    let report = pipeline.report();
    assert_eq!(report.original_shape.rows, 0);
    assert_eq!(report.percent_rows_dropped, 0.0);
    assert!(report.field_health.is_empty());
}

#[test]
fn report_is_stable_across_calls() {
    let mut pipeline = CleaningPipeline::new(&clinic_table());
    pipeline.run().unwrap();
    assert_eq!(pipeline.report(), pipeline.report());
}

#[test]
fn threshold_override_keeps_sparser_columns() {
    let options = CleanOptions {
        empty_threshold: 1.1, // nothing can exceed this
        ..CleanOptions::default()
    };
    let mut pipeline = CleaningPipeline::with_options(&clinic_table(), options);
    pipeline.run().unwrap();
    assert!(pipeline.cleaned_table().has_column("Legacy Notes"));
}

fn cell_strategy() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        2 => "[a-z@. ]{0,12}".prop_map(CellValue::Text),
        1 => (-1000.0f64..1000.0).prop_map(CellValue::Number),
        1 => Just(CellValue::Missing),
    ]
}

proptest! {
    #[test]
    fn rows_never_increase_and_percentages_stay_bounded(
        rows in proptest::collection::vec((cell_strategy(), cell_strategy()), 1..40)
    ) {
        let (ids, emails): (Vec<_>, Vec<_>) = rows.into_iter().unzip();
        let height = ids.len();
        let table = Table::from_columns(vec![
            Column::new("Record ID", ids),
            Column::new("Email", emails),
        ])
        .unwrap();
        let mut pipeline = CleaningPipeline::new(&table);
        pipeline.run().unwrap();
        let (cleaned, report) = pipeline.into_parts();

        prop_assert!(cleaned.height() <= height);
        prop_assert_eq!(report.original_shape.rows, height);
        prop_assert!(report.percent_rows_dropped >= 0.0);
        prop_assert!(report.percent_rows_dropped <= 100.0);
        for entry in &report.field_health {
            prop_assert!(entry.percent_of_rows >= 0.0);
            prop_assert!(entry.percent_improvement <= 100.0);
        }
        for name in &report.columns_removed {
            prop_assert!(!cleaned.has_column(name));
        }
    }
}
