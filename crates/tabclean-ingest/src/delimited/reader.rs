//! Delimited text reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use tabclean_model::{Row, Table};

use crate::error::{IngestError, Result};
use crate::options::IngestOptions;

use super::header::dedupe_raw_headers;
use super::typing::type_column;

/// Rejects UTF-16 input, which the reader would otherwise mangle silently.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::open(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Loads a delimited text file into a [`Table`].
///
/// The first record is the header. Column and row order follow the file.
/// Fields matching [`IngestOptions::na_values`] load as missing, and columns
/// whose values all parse as numbers load as numeric.
///
/// # Errors
///
/// Fails if the file is missing or unreadable, is not UTF-8, has no header,
/// or contains a record wider than the header.
pub fn read_table(path: &Path, options: &IngestOptions) -> Result<Table> {
    validate_encoding(path)?;

    let delimiter = u8::try_from(options.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(IngestError::InvalidDelimiter {
            delimiter: options.delimiter,
        })?;

    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let raw_headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(path, e))?
        .iter()
        .map(str::to_string)
        .collect();
    if raw_headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let headers = dedupe_raw_headers(&raw_headers);
    let width = headers.len();

    let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); width];
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, e))?;
        if record.len() > width {
            return Err(IngestError::RecordWidth {
                path: path.to_path_buf(),
                line: record.position().map_or(0, csv::Position::line),
                expected: width,
                actual: record.len(),
            });
        }
        for (idx, column) in columns.iter_mut().enumerate() {
            let field = record
                .get(idx)
                .filter(|field| !options.is_na(field))
                .map(str::to_string);
            column.push(field);
        }
    }

    let height = columns.first().map_or(0, Vec::len);
    let typed: Vec<Vec<_>> = columns.into_iter().map(type_column).collect();
    let mut rows: Vec<Row> = (0..height).map(|_| Row::new(Vec::with_capacity(width))).collect();
    for column in typed {
        for (row, cell) in rows.iter_mut().zip(column) {
            row.cells.push(cell);
        }
    }

    debug!(
        path = %path.display(),
        columns = width,
        rows = height,
        "loaded table"
    );

    Table::from_rows(headers, rows).map_err(|source| IngestError::Model {
        path: path.to_path_buf(),
        source,
    })
}

fn csv_error(path: &Path, source: csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    }
}
