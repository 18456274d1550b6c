use std::path::PathBuf;

use serde::Serialize;

use tabclean_model::CleanReport;

/// Outcome of one `tabclean` invocation.
#[derive(Debug, Serialize)]
pub struct CleanRun {
    pub input: PathBuf,
    pub output: PathBuf,
    /// False for `--dry-run`.
    pub written: bool,
    pub report: CleanReport,
    /// The cleaned table as it would have been written, for `--dry-run`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}
