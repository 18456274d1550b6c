//! CLI argument definitions for tabclean.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabclean",
    version,
    about = "Clean a delimited data file",
    long_about = "Clean a delimited data file.\n\n\
                  Normalizes headers to snake_case, trims text, optionally rewrites\n\
                  date columns as YYYY-MM-DD, removes duplicate rows and fills\n\
                  missing values (0 for numeric columns, empty text otherwise)."
)]
pub struct Cli {
    /// Path to the raw input file.
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    /// Path of the cleaned output file (parent directories are created).
    #[arg(long, value_name = "PATH")]
    pub output: PathBuf,

    /// Column used to identify duplicate records (default: compare whole rows).
    #[arg(long = "id-col", value_name = "NAME")]
    pub id_col: Option<String>,

    /// Detect date columns and rewrite them as YYYY-MM-DD.
    #[arg(long = "infer-dates")]
    pub infer_dates: bool,

    /// Field delimiter of the input file (default: ',').
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// TOML file with default options; command-line flags take precedence.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Clean and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// How to print the run summary.
    #[arg(long, value_enum, default_value = "table")]
    pub summary: SummaryArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI summary choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SummaryArg {
    Table,
    Json,
    None,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_required_paths() {
        let cli = Cli::try_parse_from([
            "tabclean",
            "--input",
            "data/raw/customers.csv",
            "--output",
            "data/clean/customers.csv",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("data/raw/customers.csv"));
        assert_eq!(cli.output, PathBuf::from("data/clean/customers.csv"));
        assert!(cli.id_col.is_none());
        assert!(!cli.infer_dates);
        assert_eq!(cli.summary, SummaryArg::Table);
    }

    #[test]
    fn parses_cleaning_flags() {
        let cli = Cli::try_parse_from([
            "tabclean",
            "--input",
            "in.csv",
            "--output",
            "out.csv",
            "--id-col",
            "Customer ID",
            "--infer-dates",
            "--delimiter",
            ";",
            "--summary",
            "json",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.id_col.as_deref(), Some("Customer ID"));
        assert!(cli.infer_dates);
        assert_eq!(cli.delimiter, Some(';'));
        assert_eq!(cli.summary, SummaryArg::Json);
        assert!(cli.verbosity.is_present());
    }

    #[test]
    fn output_is_required() {
        assert!(Cli::try_parse_from(["tabclean", "--input", "in.csv"]).is_err());
    }
}
