//! Date-like column detection and ISO 8601 formatting.
//!
//! A text column is date-like when a strict majority of its non-missing text
//! cells parse under [`DATE_PATTERNS`]. Patterns are tried in list order and
//! the first success wins, so ambiguous values resolve the same way on every
//! run: `03-04-2024` is day-month-year (3 April) and `03/04/2024` is
//! month/day/year (4 March).

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use tabclean_model::{CellValue, ColumnType, Table, infer_column_type};

/// Output format for every cell of a date-like column.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// What a pattern captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Date,
    /// Date and time of day; only the date is kept.
    DateTime,
}

/// A `chrono` format string accepted as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePattern {
    pub format: &'static str,
    pub kind: PatternKind,
}

impl DatePattern {
    const fn date(format: &'static str) -> Self {
        Self {
            format,
            kind: PatternKind::Date,
        }
    }

    const fn datetime(format: &'static str) -> Self {
        Self {
            format,
            kind: PatternKind::DateTime,
        }
    }

    /// Parses `value` under this pattern.
    ///
    /// The year must be written with exactly four digits; chrono's `%Y`
    /// alone would read `03/04/24` as the year 3.
    pub fn parse(&self, value: &str) -> Option<NaiveDate> {
        if !self.has_four_digit_year(value) {
            return None;
        }
        match self.kind {
            PatternKind::Date => NaiveDate::parse_from_str(value, self.format).ok(),
            PatternKind::DateTime => NaiveDateTime::parse_from_str(value, self.format)
                .ok()
                .map(|dt| dt.date()),
        }
    }

    // Every pattern puts `%Y` either first or last.
    fn has_four_digit_year(&self, value: &str) -> bool {
        let value = value.trim();
        let digits = if self.format.starts_with("%Y") {
            value.chars().take_while(char::is_ascii_digit).count()
        } else {
            value.chars().rev().take_while(char::is_ascii_digit).count()
        };
        digits == 4
    }
}

/// Accepted input patterns, in priority order.
pub const DATE_PATTERNS: &[DatePattern] = &[
    DatePattern::date("%Y-%m-%d"),
    DatePattern::date("%Y/%m/%d"),
    DatePattern::date("%d-%m-%Y"),
    DatePattern::date("%m/%d/%Y"),
    DatePattern::date("%d.%m.%Y"),  // 15.01.2024
    DatePattern::date("%d-%b-%Y"),  // 15-Jan-2024
    DatePattern::date("%d %b %Y"),  // 15 Jan 2024
    DatePattern::date("%d %B %Y"),  // 15 January 2024
    DatePattern::date("%b %d, %Y"), // Jan 15, 2024
    DatePattern::date("%B %d, %Y"), // January 15, 2024
    DatePattern::datetime("%Y-%m-%dT%H:%M:%S%.f"),
    DatePattern::datetime("%Y-%m-%d %H:%M:%S%.f"),
    DatePattern::datetime("%Y-%m-%dT%H:%M"),
    DatePattern::datetime("%Y-%m-%d %H:%M"),
];

/// Result of the date stage.
#[derive(Debug, Clone)]
pub struct DateOutcome {
    pub table: Table,
    /// Columns classified as date-like, in column order.
    pub date_columns: Vec<String>,
    /// Cells in date-like columns that matched no pattern and became missing.
    pub unparsed: usize,
}

/// Returns the first pattern that parses `value`, with the parsed date.
pub fn match_pattern(value: &str) -> Option<(&'static DatePattern, NaiveDate)> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.parse(trimmed).map(|date| (pattern, date)))
}

/// Parses `value` with the first matching pattern.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    match_pattern(value).map(|(_, date)| date)
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Majority vote over the non-missing text cells of a column.
///
/// Numeric columns and columns without text are never date-like.
pub fn is_date_like<'a>(cells: impl IntoIterator<Item = &'a CellValue> + Clone) -> bool {
    if infer_column_type(cells.clone()) == ColumnType::Numeric {
        return false;
    }
    let mut total = 0usize;
    let mut parsed = 0usize;
    for value in cells.into_iter().filter_map(CellValue::as_text) {
        total += 1;
        if parse_date(value).is_some() {
            parsed += 1;
        }
    }
    total > 0 && parsed * 2 > total
}

/// Rewrites every date-like column to ISO dates.
///
/// Cells of a date-like column that match no pattern become missing; this
/// is counted and logged, never an error. Other columns are left as they are.
pub fn format_dates(mut table: Table) -> DateOutcome {
    let mut date_columns = Vec::new();
    let mut unparsed = 0usize;

    for idx in 0..table.width() {
        let name = table.columns()[idx].clone();
        if !is_date_like(table.column_values(idx)) {
            debug!(column = %name, "not date-like");
            continue;
        }

        let mut column_unparsed = 0usize;
        table = table.map_column(idx, |cell| {
            let date = match &cell {
                CellValue::Missing => return CellValue::Missing,
                CellValue::Text(value) => parse_date(value),
                CellValue::Numeric(_) => None,
            };
            match date {
                Some(date) => CellValue::Text(format_iso_date(date)),
                None => {
                    column_unparsed += 1;
                    CellValue::Missing
                }
            }
        });

        if column_unparsed > 0 {
            warn!(
                column = %name,
                cells = column_unparsed,
                "unparseable values in date column set to missing"
            );
        }
        debug!(column = %name, "formatted date column");
        unparsed += column_unparsed;
        date_columns.push(name);
    }

    DateOutcome {
        table,
        date_columns,
        unparsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn test_required_patterns() {
        assert_eq!(parse_date("2024-04-01"), Some(ymd(2024, 4, 1)));
        assert_eq!(parse_date("2024/04/02"), Some(ymd(2024, 4, 2)));
        assert_eq!(parse_date("03-04-2024"), Some(ymd(2024, 4, 3)));
        assert_eq!(parse_date("04/15/2024"), Some(ymd(2024, 4, 15)));
    }

    #[test]
    fn test_ambiguous_values_follow_pattern_order() {
        let (pattern, date) = match_pattern("03-04-2024").expect("parses");
        assert_eq!(pattern.format, "%d-%m-%Y");
        assert_eq!(date, ymd(2024, 4, 3));

        let (pattern, date) = match_pattern("03/04/2024").expect("parses");
        assert_eq!(pattern.format, "%m/%d/%Y");
        assert_eq!(date, ymd(2024, 3, 4));
    }

    #[test]
    fn test_supplementary_patterns() {
        assert_eq!(parse_date("15.01.2024"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("15-Jan-2024"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("Jan 15, 2024"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("15 January 2024"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("2024-01-15T10:30:00"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("2024-01-15 10:30"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn test_rejects_non_dates() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("hello"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date("31/02/2024"), None);
        assert_eq!(parse_date("20240115"), None);
    }

    #[test]
    fn test_two_digit_years_do_not_parse() {
        assert_eq!(parse_date("03/04/24"), None);
        assert_eq!(parse_date("24-04-01"), None);
        assert_eq!(parse_date("15-1-24"), None);
        assert_eq!(parse_date("1/2/99"), None);
        assert_eq!(parse_date("Jan 15, 24"), None);
        assert_eq!(parse_date("24-01-15T10:30"), None);
        assert_eq!(parse_date("02024-01-15"), None);
    }

    #[test]
    fn test_short_year_column_is_not_date_like() {
        let cells = vec![
            CellValue::text("03/04/24"),
            CellValue::text("03/05/24"),
            CellValue::text("12/31/23"),
        ];
        assert!(!is_date_like(&cells));
    }

    #[test]
    fn test_majority_rule() {
        let cells = vec![
            CellValue::text("2024-01-01"),
            CellValue::text("2024-01-02"),
            CellValue::text("soon"),
            CellValue::Missing,
        ];
        assert!(is_date_like(&cells));

        let tie = vec![CellValue::text("2024-01-01"), CellValue::text("soon")];
        assert!(!is_date_like(&tie));
    }

    #[test]
    fn test_empty_and_numeric_columns_are_not_date_like() {
        let empty = vec![CellValue::Missing, CellValue::Missing];
        assert!(!is_date_like(&empty));

        let numeric = vec![CellValue::Numeric(20240101.0), CellValue::Numeric(1.0)];
        assert!(!is_date_like(&numeric));
    }
}
