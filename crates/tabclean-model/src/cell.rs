//! Cell values.

use serde::{Deserialize, Serialize};

/// A single table cell.
///
/// Whether a cell is numeric is decided when the table is loaded, not by a
/// declared schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    #[default]
    Missing,
    Text(String),
    Numeric(f64),
}

impl CellValue {
    /// Builds a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Self::Numeric(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns a hashable key for equality grouping, or `None` when missing.
    pub fn key(&self) -> Option<CellKey> {
        match self {
            Self::Missing => None,
            Self::Text(value) => Some(CellKey::Text(value.clone())),
            Self::Numeric(value) => Some(CellKey::Numeric(numeric_bits(*value))),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Numeric(value)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Hashable identity of a non-missing cell.
///
/// Text and numeric cells never compare equal to each other, even when the
/// text spells the number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellKey {
    Text(String),
    Numeric(u64),
}

// Folds -0.0 into 0.0 so both land on the same key.
fn numeric_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}
