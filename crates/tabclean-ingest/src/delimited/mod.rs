//! Delimited text reading utilities.

mod header;
mod reader;
mod typing;

pub use header::dedupe_raw_headers;
pub use reader::{read_table, validate_encoding};
pub use typing::parse_number;
