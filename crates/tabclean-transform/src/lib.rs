//! Cleaning stages for tabclean tables.
//!
//! - **header**: lowercase ASCII snake_case column names, collision-free
//! - **trim**: strip surrounding whitespace from text cells
//! - **dates**: detect date-like columns and rewrite them as `YYYY-MM-DD`
//! - **dedupe**: drop repeated records by id column or whole row
//! - **fill**: replace missing cells with `0` or `""` by column type
//! - **pipeline**: run all of the above in order

pub mod dates;
pub mod dedupe;
pub mod fill;
pub mod header;
pub mod pipeline;
pub mod trim;

pub use dates::{DATE_PATTERNS, DatePattern, format_dates, parse_date};
pub use dedupe::deduplicate;
pub use fill::fill_missing;
pub use header::{apply_header_normalization, normalize_header, normalize_headers};
pub use pipeline::{CleanOutcome, clean_table};
pub use trim::trim_strings;
