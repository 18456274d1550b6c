//! Column type inference.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;

/// Logical type of a column, inferred from its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Numeric,
    #[default]
    Text,
}

impl ColumnType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Text => "text",
        }
    }

    /// The value a missing cell of this type is filled with.
    pub fn fill_value(self) -> CellValue {
        match self {
            Self::Numeric => CellValue::Numeric(0.0),
            Self::Text => CellValue::Text(String::new()),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infers a column type by majority vote over its non-missing cells.
///
/// Numeric wins only with a strict majority; ties and all-missing columns
/// are text.
pub fn infer_column_type<'a>(cells: impl IntoIterator<Item = &'a CellValue>) -> ColumnType {
    let mut numeric = 0usize;
    let mut text = 0usize;
    for cell in cells {
        match cell {
            CellValue::Numeric(_) => numeric += 1,
            CellValue::Text(_) => text += 1,
            CellValue::Missing => {}
        }
    }
    if numeric > text {
        ColumnType::Numeric
    } else {
        ColumnType::Text
    }
}
