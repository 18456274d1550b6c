use std::collections::BTreeMap;

use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tabclean_model::{ColumnType, DedupeMode};

use crate::cli::SummaryArg;
use crate::types::CleanRun;

pub fn print_summary(run: &CleanRun, format: SummaryArg) -> Result<()> {
    match format {
        SummaryArg::Table => println!("{}", render_summary(run)),
        SummaryArg::Json => println!("{}", render_json(run)?),
        SummaryArg::None => {}
    }
    Ok(())
}

pub fn render_json(run: &CleanRun) -> Result<String> {
    serde_json::to_string_pretty(run).context("serialize summary")
}

/// Headline counts followed by one line per output column.
pub fn render_summary(run: &CleanRun) -> String {
    let report = &run.report;
    let mut lines = Vec::new();
    lines.push(format!("Input: {}", run.input.display()));
    if run.written {
        lines.push(format!("Output: {}", run.output.display()));
    } else {
        lines.push(format!("Output: {} (dry run, not written)", run.output.display()));
    }

    let mut counts = Table::new();
    counts.set_header(vec![header_cell("Step"), header_cell("Result")]);
    apply_table_style(&mut counts);
    align_column(&mut counts, 1, CellAlignment::Right);
    counts.add_row(vec![
        Cell::new("Rows in"),
        Cell::new(report.input_rows),
    ]);
    counts.add_row(vec![
        Cell::new("Headers renamed"),
        count_cell(report.header_renames.len(), Color::Cyan),
    ]);
    counts.add_row(vec![
        Cell::new("Cells trimmed"),
        count_cell(report.trimmed_cells, Color::Cyan),
    ]);
    counts.add_row(vec![
        Cell::new("Date columns"),
        count_cell(report.date_columns.len(), Color::Cyan),
    ]);
    counts.add_row(vec![
        Cell::new("Unparseable dates"),
        count_cell(report.unparsed_dates, Color::Yellow),
    ]);
    counts.add_row(vec![
        Cell::new(format!("Duplicates removed ({})", dedupe_label(&report.dedupe_mode))),
        count_cell(report.duplicates_removed, Color::Cyan),
    ]);
    counts.add_row(vec![
        Cell::new("Cells filled"),
        count_cell(report.filled_cells(), Color::Cyan),
    ]);
    counts.add_row(vec![
        Cell::new("Rows out").add_attribute(Attribute::Bold),
        Cell::new(report.output_rows).add_attribute(Attribute::Bold),
    ]);
    lines.push(counts.to_string());

    if report.id_column_fallback {
        lines.push("Note: id column not found, duplicates compared on whole rows".to_string());
    }

    if !report.fills.is_empty() {
        let sources: BTreeMap<&str, &str> = report
            .header_renames
            .iter()
            .map(|rename| (rename.to.as_str(), rename.from.as_str()))
            .collect();
        let mut columns = Table::new();
        columns.set_header(vec![
            header_cell("Column"),
            header_cell("Source header"),
            header_cell("Type"),
            header_cell("Date"),
            header_cell("Filled"),
        ]);
        apply_columns_style(&mut columns);
        align_column(&mut columns, 3, CellAlignment::Center);
        align_column(&mut columns, 4, CellAlignment::Right);
        for fill in &report.fills {
            let source = sources
                .get(fill.column.as_str())
                .map_or_else(|| dim_cell("-"), |from| Cell::new(format!("{from:?}")));
            let is_date = report.date_columns.iter().any(|name| name == &fill.column);
            columns.add_row(vec![
                Cell::new(&fill.column).fg(Color::Cyan),
                source,
                type_cell(fill.column_type),
                if is_date {
                    Cell::new("✓").fg(Color::Green)
                } else {
                    dim_cell("-")
                },
                count_cell(fill.filled, Color::Yellow),
            ]);
        }
        lines.push(columns.to_string());
    }

    lines.join("\n")
}

fn dedupe_label(mode: &DedupeMode) -> String {
    match mode {
        DedupeMode::ById(column) => format!("by {column}"),
        DedupeMode::FullRow => "full row".to_string(),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn type_cell(column_type: ColumnType) -> Cell {
    match column_type {
        ColumnType::Numeric => Cell::new(column_type).fg(Color::Magenta),
        ColumnType::Text => Cell::new(column_type),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_columns_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tabclean_model::{CleanReport, ColumnFill, HeaderRename};

    use super::*;

    fn run() -> CleanRun {
        CleanRun {
            input: PathBuf::from("data/raw/customers.csv"),
            output: PathBuf::from("data/clean/customers.csv"),
            written: true,
            report: CleanReport {
                input_rows: 3,
                output_rows: 2,
                header_renames: vec![HeaderRename {
                    from: "Signup Date".to_string(),
                    to: "signup_date".to_string(),
                }],
                trimmed_cells: 1,
                date_columns: vec!["signup_date".to_string()],
                unparsed_dates: 0,
                dedupe_mode: DedupeMode::ById("id".to_string()),
                id_column_fallback: false,
                duplicates_removed: 1,
                fills: vec![
                    ColumnFill {
                        column: "id".to_string(),
                        column_type: ColumnType::Numeric,
                        filled: 0,
                    },
                    ColumnFill {
                        column: "signup_date".to_string(),
                        column_type: ColumnType::Text,
                        filled: 1,
                    },
                ],
            },
            preview: None,
        }
    }

    #[test]
    fn table_summary_lists_counts_and_columns() {
        let rendered = render_summary(&run());
        assert!(rendered.starts_with("Input: data/raw/customers.csv\nOutput: data/clean/customers.csv\n"));
        assert!(rendered.contains("Duplicates removed (by id)"));
        assert!(rendered.contains("signup_date"));
        assert!(rendered.contains("\"Signup Date\""));
        assert!(rendered.contains("numeric"));
    }

    #[test]
    fn dry_run_is_flagged() {
        let mut run = run();
        run.written = false;
        assert!(render_summary(&run).contains("(dry run, not written)"));
    }

    #[test]
    fn json_summary_is_the_report() {
        let json: serde_json::Value = serde_json::from_str(&render_json(&run()).unwrap()).unwrap();
        assert_eq!(json["written"], true);
        assert_eq!(json["report"]["duplicates_removed"], 1);
        assert_eq!(json["report"]["dedupe_mode"]["mode"], "by_id");
        assert_eq!(json["report"]["fills"][0]["column_type"], "numeric");
        assert!(json.get("preview").is_none());
    }

    #[test]
    fn json_summary_carries_dry_run_preview() {
        let mut run = run();
        run.written = false;
        run.preview = Some("id\n1\n".to_string());
        let json: serde_json::Value = serde_json::from_str(&render_json(&run).unwrap()).unwrap();
        assert_eq!(json["preview"], "id\n1\n");
    }
}
