//! Parser configuration and validation.
//!
//! Defaults: comma-delimited fields and an `END` marker that does not stop
//! the scan.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::DEFAULT_DELIMITER;
use crate::{Error, Result};

/// What the scanner does when it meets an `END` line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndMarkerPolicy {
    /// Count the marker and keep reading lines
    #[default]
    Continue,
    /// Treat the marker as the end of records and stop reading
    Stop,
}

/// Configuration for a status scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Field delimiter, non-empty
    pub delimiter: String,

    /// Handling of `END` lines
    pub end_marker: EndMarkerPolicy,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            end_marker: EndMarkerPolicy::default(),
        }
    }
}

impl ParserConfig {
    /// Use a different field delimiter
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Use a different `END` marker policy
    pub fn with_end_marker(mut self, end_marker: EndMarkerPolicy) -> Self {
        self.end_marker = end_marker;
        self
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(Error::configuration("delimiter must not be empty"));
        }

        debug!(
            "Parser configuration: delimiter={:?}, end_marker={:?}",
            self.delimiter, self.end_marker
        );
        Ok(())
    }
}
