//! Configuration options for a cleaning run.

use serde::{Deserialize, Serialize};

/// Options controlling the cleaning pipeline.
///
/// Built once before the run starts and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CleanOptions {
    /// Column whose value identifies a record for deduplication.
    ///
    /// Given in source spelling; it is normalized like the headers before
    /// lookup. When absent, or when no column matches, whole rows are compared.
    pub id_column: Option<String>,

    /// Detect date-like text columns and rewrite them as `YYYY-MM-DD`.
    pub infer_dates: bool,
}

impl CleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id_column(mut self, column: impl Into<String>) -> Self {
        self.id_column = Some(column.into());
        self
    }

    #[must_use]
    pub fn with_infer_dates(mut self, enable: bool) -> Self {
        self.infer_dates = enable;
        self
    }
}
