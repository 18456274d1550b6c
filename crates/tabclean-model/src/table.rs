#![deny(unsafe_code)]

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;
use crate::error::{ModelError, Result};

/// One record. Cells are positionally aligned with [`Table::columns`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }
}

impl From<Vec<CellValue>> for Row {
    fn from(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }
}

/// An in-memory table: unique, ordered column names and ordered rows.
///
/// Every row has exactly one cell per column. The constructors enforce this,
/// and the transformation stages keep it by rebuilding rows column-wise.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Creates an empty table with the given header.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateColumn`] if a name appears twice.
    pub fn new(columns: Vec<String>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(ModelError::DuplicateColumn { name: name.clone() });
            }
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Creates a table from a header and rows in one go.
    ///
    /// # Errors
    ///
    /// Fails on duplicate column names or a row of the wrong width.
    pub fn from_rows<R>(columns: Vec<String>, rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: Into<Row>,
    {
        let mut table = Self::new(columns)?;
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Appends a row.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::RowWidth`] if the row does not match the header.
    pub fn push_row(&mut self, row: impl Into<Row>) -> Result<()> {
        let row = row.into();
        if row.len() != self.columns.len() {
            return Err(ModelError::RowWidth {
                row: self.rows.len(),
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Iterates the cells of one column in row order.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &CellValue> + Clone + '_ {
        self.rows.iter().filter_map(move |row| row.get(index))
    }

    /// Looks up a cell by row position and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }

    /// Counts missing cells across the whole table.
    pub fn missing_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| cell.is_missing())
            .count()
    }

    /// Replaces the header, keeping rows untouched.
    ///
    /// # Errors
    ///
    /// Fails if the new header has a different width or repeats a name.
    pub fn with_columns(self, columns: Vec<String>) -> Result<Self> {
        if columns.len() != self.columns.len() {
            return Err(ModelError::RowWidth {
                row: 0,
                expected: self.columns.len(),
                actual: columns.len(),
            });
        }
        let mut renamed = Self::new(columns)?;
        renamed.rows = self.rows;
        Ok(renamed)
    }

    /// Keeps the rows for which `keep` returns true, preserving order.
    pub fn retain_rows(mut self, mut keep: impl FnMut(usize, &Row) -> bool) -> Self {
        let mut index = 0usize;
        self.rows.retain(|row| {
            let kept = keep(index, row);
            index += 1;
            kept
        });
        self
    }

    /// Applies `f` to every cell of column `index`.
    pub fn map_column(mut self, index: usize, mut f: impl FnMut(CellValue) -> CellValue) -> Self {
        for row in &mut self.rows {
            if let Some(cell) = row.cells.get_mut(index) {
                let value = std::mem::take(cell);
                *cell = f(value);
            }
        }
        self
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Row>) {
        (self.columns, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn rejects_duplicate_columns() {
        let err = Table::new(names(&["a", "b", "a"])).unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateColumn {
                name: "a".to_string()
            }
        );
    }

    #[test]
    fn rejects_short_row() {
        let mut table = Table::new(names(&["a", "b"])).unwrap();
        let err = table.push_row(vec![CellValue::text("x")]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::RowWidth {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn cell_lookup_by_name() {
        let table = Table::from_rows(
            names(&["id", "name"]),
            vec![vec![CellValue::Numeric(1.0), CellValue::text("Alice")]],
        )
        .unwrap();
        assert_eq!(table.cell(0, "name"), Some(&CellValue::text("Alice")));
        assert_eq!(table.cell(0, "other"), None);
        assert_eq!(table.cell(3, "id"), None);
    }

    #[test]
    fn retain_rows_preserves_order() {
        let table = Table::from_rows(
            names(&["n"]),
            (0..5).map(|n| vec![CellValue::Numeric(f64::from(n))]),
        )
        .unwrap();
        let table = table.retain_rows(|index, _| index % 2 == 0);
        let kept: Vec<f64> = table
            .column_values(0)
            .filter_map(CellValue::as_numeric)
            .collect();
        assert_eq!(kept, vec![0.0, 2.0, 4.0]);
    }

    #[test]
    fn with_columns_checks_width() {
        let table = Table::new(names(&["a", "b"])).unwrap();
        assert!(table.with_columns(names(&["a"])).is_err());
    }
}
