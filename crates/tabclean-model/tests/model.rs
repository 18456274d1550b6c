//! Tests for tabclean-model types.

use tabclean_model::{
    CellValue, CleanOptions, CleanReport, ColumnFill, ColumnType, DedupeMode, Table,
};

#[test]
fn options_parse_from_toml() {
    let options: CleanOptions = toml::from_str(
        r#"
id_column = "Customer ID"
infer_dates = true
"#,
    )
    .expect("parse options");
    assert_eq!(options.id_column.as_deref(), Some("Customer ID"));
    assert!(options.infer_dates);
}

#[test]
fn options_default_when_empty() {
    let options: CleanOptions = toml::from_str("").expect("parse options");
    assert_eq!(options, CleanOptions::default());
}

#[test]
fn options_reject_unknown_keys() {
    let result: Result<CleanOptions, _> = toml::from_str("dedupe = true");
    assert!(result.is_err());
}

#[test]
fn report_serializes() {
    let report = CleanReport {
        input_rows: 3,
        output_rows: 2,
        dedupe_mode: DedupeMode::ById("id".to_string()),
        duplicates_removed: 1,
        fills: vec![
            ColumnFill {
                column: "age".to_string(),
                column_type: ColumnType::Numeric,
                filled: 2,
            },
            ColumnFill {
                column: "name".to_string(),
                column_type: ColumnType::Text,
                filled: 1,
            },
        ],
        ..CleanReport::default()
    };
    assert_eq!(report.filled_cells(), 3);

    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["dedupe_mode"]["mode"], "by_id");
    assert_eq!(json["dedupe_mode"]["column"], "id");
    assert_eq!(json["fills"][0]["column_type"], "numeric");

    let round: CleanReport = serde_json::from_value(json).expect("deserialize report");
    assert_eq!(round, report);
}

#[test]
fn table_counts_missing_cells() {
    let table = Table::from_rows(
        vec!["a".to_string(), "b".to_string()],
        vec![
            vec![CellValue::Missing, CellValue::text("x")],
            vec![CellValue::Numeric(1.0), CellValue::Missing],
        ],
    )
    .expect("build table");
    assert_eq!(table.height(), 2);
    assert_eq!(table.width(), 2);
    assert_eq!(table.missing_count(), 2);
}
