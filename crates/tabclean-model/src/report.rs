//! Per-run summary of what the pipeline changed.

use serde::{Deserialize, Serialize};

use crate::column::ColumnType;

/// How duplicate rows were identified.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "column", rename_all = "snake_case")]
pub enum DedupeMode {
    /// Rows sharing a non-missing value in this column are duplicates.
    ById(String),
    /// Rows equal in every column are duplicates.
    #[default]
    FullRow,
}

/// A header that changed during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRename {
    pub from: String,
    pub to: String,
}

/// Fill statistics for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFill {
    pub column: String,
    pub column_type: ColumnType,
    pub filled: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CleanReport {
    pub input_rows: usize,
    pub output_rows: usize,
    pub header_renames: Vec<HeaderRename>,
    pub trimmed_cells: usize,
    pub date_columns: Vec<String>,
    /// Cells in date-like columns that matched no pattern and became missing.
    pub unparsed_dates: usize,
    pub dedupe_mode: DedupeMode,
    /// Set when an id column was requested but not present in the table.
    pub id_column_fallback: bool,
    pub duplicates_removed: usize,
    pub fills: Vec<ColumnFill>,
}

impl CleanReport {
    /// Total number of cells filled across all columns.
    pub fn filled_cells(&self) -> usize {
        self.fills.iter().map(|fill| fill.filled).sum()
    }
}
