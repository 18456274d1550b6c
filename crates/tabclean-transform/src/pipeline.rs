//! The cleaning pipeline.
//!
//! Stages run in a fixed order, each consuming the table produced by the one
//! before:
//!
//! 1. normalize headers
//! 2. trim text cells
//! 3. format date-like columns (only with `infer_dates`)
//! 4. drop duplicate rows
//! 5. fill missing cells
//!
//! No stage can fail on a well-formed table; load and store errors belong to
//! the callers.
//!
//! # Example
//!
//! ```ignore
//! use tabclean_model::CleanOptions;
//! use tabclean_transform::clean_table;
//!
//! let options = CleanOptions::new().with_id_column("Customer ID").with_infer_dates(true);
//! let outcome = clean_table(table, &options);
//! println!("removed {} duplicates", outcome.report.duplicates_removed);
//! ```

use tracing::{info, info_span};

use tabclean_model::{CleanOptions, CleanReport, Table};

use crate::dates::format_dates;
use crate::dedupe::deduplicate;
use crate::fill::fill_missing;
use crate::header::{apply_header_normalization, normalize_header};
use crate::trim::trim_strings;

/// The cleaned table and what changed on the way.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub table: Table,
    pub report: CleanReport,
}

/// Runs every cleaning stage over `table`.
pub fn clean_table(table: Table, options: &CleanOptions) -> CleanOutcome {
    let mut report = CleanReport {
        input_rows: table.height(),
        ..CleanReport::default()
    };

    // An id given in source spelling follows its column through renaming.
    let raw_id_index = options
        .id_column
        .as_deref()
        .and_then(|name| table.column_index(name));

    let header = info_span!("normalize_headers").in_scope(|| {
        let outcome = apply_header_normalization(table);
        info!(renamed = outcome.renames.len(), "normalized headers");
        outcome
    });
    report.header_renames = header.renames;

    let trim = info_span!("trim_strings").in_scope(|| {
        let outcome = trim_strings(header.table);
        info!(cells = outcome.trimmed, "trimmed text cells");
        outcome
    });
    report.trimmed_cells = trim.trimmed;

    let table = if options.infer_dates {
        let dates = info_span!("format_dates").in_scope(|| {
            let outcome = format_dates(trim.table);
            info!(
                columns = outcome.date_columns.len(),
                unparsed = outcome.unparsed,
                "formatted date columns"
            );
            outcome
        });
        report.date_columns = dates.date_columns;
        report.unparsed_dates = dates.unparsed;
        dates.table
    } else {
        trim.table
    };

    let id_column = match raw_id_index {
        Some(index) => table.columns().get(index).cloned(),
        None => options.id_column.as_deref().map(normalize_header),
    };
    let dedupe = info_span!("deduplicate").in_scope(|| {
        let outcome = deduplicate(table, id_column.as_deref());
        info!(removed = outcome.removed, mode = ?outcome.mode, "dropped duplicate rows");
        outcome
    });
    report.dedupe_mode = dedupe.mode;
    report.id_column_fallback = dedupe.id_column_fallback;
    report.duplicates_removed = dedupe.removed;

    let fill = info_span!("fill_missing").in_scope(|| {
        let outcome = fill_missing(dedupe.table);
        let filled: usize = outcome.fills.iter().map(|fill| fill.filled).sum();
        info!(cells = filled, "filled missing cells");
        outcome
    });
    report.fills = fill.fills;
    report.output_rows = fill.table.height();

    CleanOutcome {
        table: fill.table,
        report,
    }
}
