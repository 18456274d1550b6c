//! Table loading for tabclean.
//!
//! Reads a delimited text file into a [`tabclean_model::Table`]:
//!
//! - the first record is the header; a UTF-8 BOM is dropped and exact
//!   repeated names are renamed `a.1`, `a.2`, …
//! - NA tokens (pandas' defaults unless overridden) load as missing
//! - columns whose values all parse as numbers load as numeric
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tabclean_ingest::{IngestOptions, read_table};
//!
//! let table = read_table(Path::new("data/raw/customers.csv"), &IngestOptions::default())?;
//! ```

mod delimited;
mod error;
mod options;

// === Error Types ===
pub use error::{IngestError, Result};

// === Reading ===
pub use delimited::{dedupe_raw_headers, parse_number, read_table, validate_encoding};

// === Options ===
pub use options::{DEFAULT_NA_VALUES, IngestOptions};
