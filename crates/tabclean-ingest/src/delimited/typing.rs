//! Load-time cell typing.

use tabclean_model::CellValue;

/// Parses a field as a finite number, ignoring surrounding whitespace.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Converts one column of raw fields into cells.
///
/// A column is numeric when it has at least one value and every value parses
/// as a number; its cells then become [`CellValue::Numeric`]. Otherwise every
/// value is kept verbatim as text, so a single stray word keeps a column of
/// codes like `007` from losing its leading zeros.
pub fn type_column(fields: Vec<Option<String>>) -> Vec<CellValue> {
    let numbers: Option<Vec<Option<f64>>> = fields
        .iter()
        .map(|field| match field {
            Some(value) => parse_number(value).map(Some),
            None => Some(None),
        })
        .collect();

    match numbers {
        Some(numbers) if numbers.iter().any(Option::is_some) => {
            numbers.into_iter().map(CellValue::from).collect()
        }
        _ => fields.into_iter().map(CellValue::from).collect(),
    }
}
