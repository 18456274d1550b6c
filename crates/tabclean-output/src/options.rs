use serde::{Deserialize, Serialize};

use crate::error::{OutputError, Result};

/// How a table is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputOptions {
    /// Single ASCII field separator.
    pub delimiter: char,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl OutputOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub(crate) fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or(OutputError::InvalidDelimiter {
                delimiter: self.delimiter,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_must_be_ascii() {
        assert_eq!(OutputOptions::default().delimiter_byte().unwrap(), b',');
        assert_eq!(
            OutputOptions::default()
                .with_delimiter('\t')
                .delimiter_byte()
                .unwrap(),
            b'\t'
        );
        assert!(matches!(
            OutputOptions::default().with_delimiter('é').delimiter_byte(),
            Err(OutputError::InvalidDelimiter { delimiter: 'é' })
        ));
    }
}
