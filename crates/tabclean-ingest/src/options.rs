//! Options for reading delimited text.

use serde::{Deserialize, Serialize};

/// Field values treated as missing, matching pandas' default NA tokens.
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// How a delimited file is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IngestOptions {
    /// Single ASCII field separator.
    pub delimiter: char,
    /// Field values that load as missing. Compared after trimming whitespace.
    pub na_values: Vec<String>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            na_values: DEFAULT_NA_VALUES.iter().map(|v| (*v).to_string()).collect(),
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_na_values(mut self, values: Vec<String>) -> Self {
        self.na_values = values;
        self
    }

    /// Returns true if `field` should load as a missing cell.
    pub fn is_na(&self, field: &str) -> bool {
        let field = field.trim();
        field.is_empty() || self.na_values.iter().any(|na| na == field)
    }
}
