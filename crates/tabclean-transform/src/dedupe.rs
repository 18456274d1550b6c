use std::collections::HashSet;

use tracing::{debug, warn};

use tabclean_model::{CellKey, CellValue, DedupeMode, Table};

#[derive(Debug, Clone)]
pub struct DedupeOutcome {
    pub table: Table,
    pub mode: DedupeMode,
    /// True when an id column was requested but the table has no such column.
    pub id_column_fallback: bool,
    pub removed: usize,
}

/// Drops repeated records, keeping the first occurrence of each.
///
/// With an `id_column` present in the table, rows sharing a non-missing id
/// are duplicates; rows with a missing id are always kept. Otherwise, or when
/// the column does not exist, rows equal in every cell (missing matches
/// missing) are duplicates. Surviving rows keep their relative order.
pub fn deduplicate(table: Table, id_column: Option<&str>) -> DedupeOutcome {
    let before = table.height();
    let id_index = id_column.and_then(|name| table.column_index(name));
    let id_column_fallback = id_column.is_some() && id_index.is_none();
    if let Some(name) = id_column
        && id_index.is_none()
    {
        warn!(column = %name, "id column not found, comparing whole rows instead");
    }

    let (table, mode) = match (id_column, id_index) {
        (Some(name), Some(index)) => (
            dedupe_by_key(table, index),
            DedupeMode::ById(name.to_string()),
        ),
        _ => (dedupe_full_rows(table), DedupeMode::FullRow),
    };

    let removed = before - table.height();
    debug!(?mode, removed, "deduplicated rows");
    DedupeOutcome {
        table,
        mode,
        id_column_fallback,
        removed,
    }
}

fn dedupe_by_key(table: Table, index: usize) -> Table {
    let mut seen: HashSet<CellKey> = HashSet::new();
    table.retain_rows(|_, row| match row.get(index).and_then(CellValue::key) {
        Some(key) => seen.insert(key),
        None => true,
    })
}

fn dedupe_full_rows(table: Table) -> Table {
    let mut seen: HashSet<Vec<Option<CellKey>>> = HashSet::new();
    table.retain_rows(|_, row| {
        let key: Vec<Option<CellKey>> = row.cells.iter().map(CellValue::key).collect();
        seen.insert(key)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Table {
        Table::from_rows(
            vec!["id".to_string(), "name".to_string()],
            vec![
                vec![CellValue::Numeric(1.0), CellValue::text("Alice")],
                vec![CellValue::Numeric(2.0), CellValue::text("Bob")],
                vec![CellValue::Numeric(2.0), CellValue::text("Robert")],
                vec![CellValue::Missing, CellValue::text("Anon")],
                vec![CellValue::Missing, CellValue::text("Anon")],
                vec![CellValue::Numeric(1.0), CellValue::text("Alice")],
            ],
        )
        .expect("build table")
    }

    fn names(table: &Table) -> Vec<String> {
        table
            .column_values(1)
            .filter_map(|cell| cell.as_text().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_by_id_keeps_first_and_missing_ids() {
        let outcome = deduplicate(people(), Some("id"));
        assert_eq!(outcome.mode, DedupeMode::ById("id".to_string()));
        assert_eq!(names(&outcome.table), vec!["Alice", "Bob", "Anon", "Anon"]);
        assert_eq!(outcome.removed, 2);
        assert!(!outcome.id_column_fallback);
    }

    #[test]
    fn test_full_row_treats_missing_as_equal() {
        let outcome = deduplicate(people(), None);
        assert_eq!(outcome.mode, DedupeMode::FullRow);
        assert_eq!(names(&outcome.table), vec!["Alice", "Bob", "Robert", "Anon"]);
        assert_eq!(outcome.removed, 2);
    }

    #[test]
    fn test_unknown_id_column_falls_back() {
        let outcome = deduplicate(people(), Some("customer_id"));
        assert_eq!(outcome.mode, DedupeMode::FullRow);
        assert!(outcome.id_column_fallback);
        assert_eq!(outcome.table.height(), 4);
    }

    #[test]
    fn test_text_and_numeric_ids_are_distinct() {
        let table = Table::from_rows(
            vec!["id".to_string()],
            vec![vec![CellValue::text("1")], vec![CellValue::Numeric(1.0)]],
        )
        .expect("build table");
        let outcome = deduplicate(table, Some("id"));
        assert_eq!(outcome.removed, 0);
    }
}
