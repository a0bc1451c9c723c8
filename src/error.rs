//! Error handling for status log parsing.
//!
//! Two levels: [`DecodeError`] describes why a single record line could not be
//! decoded, [`Error`] is what a scan returns and adds the line number or the
//! I/O context.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

use crate::app::models::RecordKind;

/// Result type alias for status parsing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the status scanner and its file helpers
#[derive(Error, Debug)]
pub enum Error {
    /// The status file could not be opened
    #[error("Status stream unavailable: {path}")]
    StreamUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a line from an already open stream failed
    #[error("I/O error reading line {line}")]
    Io {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// A CLIENT_LIST or ROUTING_TABLE line could not be decoded
    #[error("Malformed numeric field on line {line}: {source}")]
    MalformedNumericField {
        line: usize,
        #[source]
        source: DecodeError,
    },

    /// Parser configuration is unusable
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a stream unavailable error for the given path
    pub fn stream_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StreamUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a read error at a 1-based line number
    pub fn io(line: usize, source: std::io::Error) -> Self {
        Self::Io { line, source }
    }

    /// Attach a 1-based line number to a decode failure
    pub fn malformed(line: usize, source: DecodeError) -> Self {
        Self::MalformedNumericField { line, source }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// The decode failure behind this error, if any
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            Self::MalformedNumericField { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Why a record line failed to decode.
///
/// Every variant is a flavour of the malformed-numeric-field condition: the
/// line is discarded as a whole and no partial record is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("{kind} record has {found} fields, expected at least {expected}")]
    TooFewFields {
        kind: RecordKind,
        expected: usize,
        found: usize,
    },

    #[error("{kind} field '{field}' is not an integer: '{value}'")]
    InvalidInteger {
        kind: RecordKind,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{kind} field '{field}' is outside the representable time range: {seconds}")]
    TimestampOutOfRange {
        kind: RecordKind,
        field: &'static str,
        seconds: i64,
    },
}

impl DecodeError {
    /// Record kind the failing line was decoded as
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::TooFewFields { kind, .. }
            | Self::InvalidInteger { kind, .. }
            | Self::TimestampOutOfRange { kind, .. } => *kind,
        }
    }
}
