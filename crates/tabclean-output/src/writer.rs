//! Delimited text writing.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use tabclean_model::{CellValue, Table};

use crate::error::{OutputError, Result};
use crate::options::OutputOptions;

/// Formats a number the way it is written to disk.
///
/// Integral values drop the fractional part (`3.0` is written `3`) and
/// negative zero is written `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        // `Display` for f64 is the shortest representation that reads back
        // to the same value and never adds a trailing `.0`.
        value.to_string()
    }
}

/// Text form of one cell. Missing cells are empty fields.
pub fn format_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Missing => String::new(),
        CellValue::Text(value) => value.clone(),
        CellValue::Numeric(value) => format_number(*value),
    }
}

/// Writes `table` to `path` as delimited text.
///
/// The header comes first, then one record per row. Parent directories are
/// created as needed. Records go to a temporary file in the destination
/// directory which replaces `path` only once everything has been written
/// and synced, so a failure leaves any existing file untouched.
pub fn write_table(table: &Table, path: &Path, options: &OutputOptions) -> Result<()> {
    let delimiter = options.delimiter_byte()?;
    let dir = destination_dir(path);
    fs::create_dir_all(&dir).map_err(|source| OutputError::CreateDir {
        path: dir.clone(),
        source,
    })?;

    let temp = NamedTempFile::new_in(&dir).map_err(|source| OutputError::TempFile {
        operation: "create",
        path: dir.clone(),
        source,
    })?;
    debug!(temp = %temp.path().display(), "writing to temporary file");

    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(temp);
    write_records(&mut writer, table).map_err(|source| OutputError::CsvWrite {
        path: path.to_path_buf(),
        source,
    })?;
    let temp = writer
        .into_inner()
        .map_err(|err| OutputError::CsvWrite {
            path: path.to_path_buf(),
            source: err.into_error().into(),
        })?;
    temp.as_file()
        .sync_all()
        .map_err(|source| OutputError::TempFile {
            operation: "sync",
            path: dir.clone(),
            source,
        })?;

    temp.persist(path).map_err(|err| OutputError::Persist {
        path: path.to_path_buf(),
        source: err.error,
    })?;

    info!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "wrote table"
    );
    Ok(())
}

/// Renders `table` to a string with the same layout as [`write_table`].
pub fn render_table(table: &Table, options: &OutputOptions) -> Result<String> {
    let delimiter = options.delimiter_byte()?;
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    let rendered = PathBuf::from("<memory>");
    write_records(&mut writer, table).map_err(|source| OutputError::CsvWrite {
        path: rendered.clone(),
        source,
    })?;
    let bytes = writer.into_inner().map_err(|err| OutputError::CsvWrite {
        path: rendered,
        source: err.into_error().into(),
    })?;
    Ok(String::from_utf8(bytes)?)
}

fn write_records<W: Write>(writer: &mut csv::Writer<W>, table: &Table) -> csv::Result<()> {
    if table.width() == 0 {
        return Ok(());
    }
    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.cells.iter().map(format_cell))?;
    }
    writer.flush()?;
    Ok(())
}

fn destination_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1_000_000.0), "1000000");
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(&CellValue::Missing), "");
        assert_eq!(format_cell(&CellValue::text(" a ")), " a ");
        assert_eq!(format_cell(&CellValue::Numeric(7.0)), "7");
    }

    #[test]
    fn test_destination_dir() {
        assert_eq!(destination_dir(Path::new("out.csv")), PathBuf::from("."));
        assert_eq!(
            destination_dir(Path::new("data/clean/out.csv")),
            PathBuf::from("data/clean")
        );
    }
}
