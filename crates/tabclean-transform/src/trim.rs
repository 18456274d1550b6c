//! Whitespace trimming of text cells.

use tabclean_model::{CellValue, Table};

#[derive(Debug, Clone)]
pub struct TrimOutcome {
    pub table: Table,
    /// Number of text cells whose value changed.
    pub trimmed: usize,
}

/// Strips leading and trailing Unicode whitespace from every text cell.
///
/// Inner whitespace is kept. Missing and numeric cells are untouched, and a
/// cell that is all whitespace becomes empty text rather than missing.
pub fn trim_strings(mut table: Table) -> TrimOutcome {
    let mut trimmed = 0usize;
    for idx in 0..table.width() {
        table = table.map_column(idx, |cell| match cell {
            CellValue::Text(value) => {
                let stripped = value.trim();
                if stripped.len() == value.len() {
                    CellValue::Text(value)
                } else {
                    trimmed += 1;
                    CellValue::Text(stripped.to_string())
                }
            }
            other => other,
        });
    }
    TrimOutcome { table, trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(cells: Vec<CellValue>) -> Table {
        Table::from_rows(vec!["v".to_string()], cells.into_iter().map(|c| vec![c]))
            .expect("build table")
    }

    #[test]
    fn test_trims_unicode_whitespace() {
        let outcome = trim_strings(table(vec![
            CellValue::text(" Alice "),
            CellValue::text("\u{00a0}Bob\t\n"),
            CellValue::text("New  York"),
            CellValue::text("\u{3000}"),
        ]));
        let values: Vec<_> = outcome.table.column_values(0).cloned().collect();
        assert_eq!(
            values,
            vec![
                CellValue::text("Alice"),
                CellValue::text("Bob"),
                CellValue::text("New  York"),
                CellValue::text(""),
            ]
        );
        assert_eq!(outcome.trimmed, 3);
    }

    #[test]
    fn test_leaves_missing_and_numeric() {
        let outcome = trim_strings(table(vec![CellValue::Missing, CellValue::Numeric(1.5)]));
        let values: Vec<_> = outcome.table.column_values(0).cloned().collect();
        assert_eq!(values, vec![CellValue::Missing, CellValue::Numeric(1.5)]);
        assert_eq!(outcome.trimmed, 0);
    }

    #[test]
    fn test_idempotent() {
        let once = trim_strings(table(vec![CellValue::text("  x  "), CellValue::text("y")]));
        let twice = trim_strings(once.table.clone());
        assert_eq!(once.table, twice.table);
        assert_eq!(twice.trimmed, 0);
    }
}
