//! Table storage for tabclean.
//!
//! Writes a [`tabclean_model::Table`] as delimited text: header first, one
//! record per row, integral numbers without a trailing `.0`, missing cells
//! as empty fields. Files are replaced atomically.

mod error;
mod options;
mod writer;

pub use error::{OutputError, Result};
pub use options::OutputOptions;
pub use writer::{format_cell, format_number, render_table, write_table};
