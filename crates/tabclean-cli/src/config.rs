//! Run configuration: built-in defaults, an optional TOML file, then flags.
//!
//! ```toml
//! [clean]
//! id_column = "Customer ID"
//! infer_dates = true
//!
//! [ingest]
//! delimiter = ";"
//! na_values = ["", "NA", "-"]
//!
//! [output]
//! delimiter = ","
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use tabclean_ingest::IngestOptions;
use tabclean_model::CleanOptions;
use tabclean_output::OutputOptions;

use crate::cli::Cli;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of a `--config` file. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub clean: CleanOptions,
    pub ingest: IngestOptions,
    pub output: OutputOptions,
}

impl ConfigFile {
    /// Reads and parses a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Everything a single run needs, fixed before the pipeline starts.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub clean: CleanOptions,
    pub ingest: IngestOptions,
    pub output_options: OutputOptions,
    pub dry_run: bool,
}

impl RunSettings {
    /// Settings from the command line alone, with built-in defaults.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            clean: CleanOptions::default(),
            ingest: IngestOptions::default(),
            output_options: OutputOptions::default(),
            dry_run: false,
        }
    }

    /// Resolves settings for `cli`, loading `--config` when given.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => {
                debug!(path = %path.display(), "loading config file");
                ConfigFile::load(path)?
            }
            None => ConfigFile::default(),
        };
        Ok(Self::layered(cli, file))
    }

    fn layered(cli: &Cli, file: ConfigFile) -> Self {
        let mut clean = file.clean;
        if let Some(id_column) = &cli.id_col {
            clean.id_column = Some(id_column.clone());
        }
        // A bare flag can only switch date inference on.
        clean.infer_dates |= cli.infer_dates;

        let mut ingest = file.ingest;
        if let Some(delimiter) = cli.delimiter {
            ingest.delimiter = delimiter;
        }

        Self {
            input: cli.input.clone(),
            output: cli.output.clone(),
            clean,
            ingest,
            output_options: file.output,
            dry_run: cli.dry_run,
        }
    }
}
