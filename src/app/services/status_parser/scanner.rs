//! Line-oriented status scanner
//!
//! Reads a status stream one line at a time, classifies each line by its
//! leading marker and dispatches record lines to the matching decoder.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, trace, warn};

use super::field_splitter::split_fields;
use super::record_decoders::{decode_client_list, decode_routing_table};
use super::stats::{ScanStats, StatusReport};
use crate::config::{EndMarkerPolicy, ParserConfig};
use crate::constants::markers;
use crate::{Error, Result};

/// Leading field of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Header,
    End,
    ClientList,
    RoutingTable,
    /// Anything else, including the empty string
    Other,
}

impl Marker {
    /// Classify a leading field. Matching is exact and case-sensitive.
    pub fn classify(field: &str) -> Self {
        match field {
            markers::HEADER => Marker::Header,
            markers::END => Marker::End,
            markers::CLIENT_LIST => Marker::ClientList,
            markers::ROUTING_TABLE => Marker::RoutingTable,
            _ => Marker::Other,
        }
    }
}

enum Flow {
    Continue,
    Stop,
}

/// Single-pass scanner over a buffered status stream.
///
/// Records accumulate inside the scanner, so when [`scan`](Self::scan)
/// fails on a malformed line the records read before it are still available
/// through [`into_report`](Self::into_report).
#[derive(Debug)]
pub struct StatusScanner<R> {
    reader: R,
    config: ParserConfig,
    report: StatusReport,
    finished: bool,
}

impl<R: BufRead> StatusScanner<R> {
    /// Create a scanner with the default configuration
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            config: ParserConfig::default(),
            report: StatusReport::default(),
            finished: false,
        }
    }

    /// Create a scanner with a validated configuration
    pub fn with_config(reader: R, config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reader,
            config,
            report: StatusReport::default(),
            finished: false,
        })
    }

    /// Read lines until end of stream (or an END line under
    /// [`EndMarkerPolicy::Stop`]).
    ///
    /// Stops at the first read or decode error. Calling again after a
    /// successful scan is a no-op.
    pub fn scan(&mut self) -> Result<()> {
        let mut buffer = Vec::new();

        while !self.finished {
            buffer.clear();
            let line_number = self.report.stats.lines_read + 1;

            let bytes = self
                .reader
                .read_until(b'\n', &mut buffer)
                .map_err(|e| Error::io(line_number, e))?;
            if bytes == 0 {
                self.finished = true;
                break;
            }
            self.report.stats.lines_read = line_number;

            let line = buffer.strip_suffix(b"\n").unwrap_or(buffer.as_slice());
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            // Invalid UTF-8 becomes U+FFFD; only decode failures abort
            let line = String::from_utf8_lossy(line);

            if let Flow::Stop = self.process_line(&line, line_number)? {
                self.report.stats.stopped_at_end = true;
                self.finished = true;
            }
        }

        Ok(())
    }

    /// Statistics gathered so far
    pub fn stats(&self) -> &ScanStats {
        &self.report.stats
    }

    /// Consume the scanner and return everything decoded so far
    pub fn into_report(self) -> StatusReport {
        self.report
    }

    fn process_line(&mut self, line: &str, line_number: usize) -> Result<Flow> {
        let fields = split_fields(line, &self.config.delimiter);
        let marker = fields.first().copied().unwrap_or_default();

        match Marker::classify(marker) {
            Marker::Header => {
                self.report.stats.header_lines += 1;
            }
            Marker::End => {
                self.report.stats.end_markers += 1;
                debug!("END marker on line {}", line_number);
                if self.config.end_marker == EndMarkerPolicy::Stop {
                    return Ok(Flow::Stop);
                }
            }
            Marker::ClientList => {
                let client = decode_client_list(&fields).map_err(|e| {
                    warn!("Rejected line {}: {}", line_number, e);
                    Error::malformed(line_number, e)
                })?;
                trace!("Client '{}' on line {}", client.name, line_number);
                self.report.clients.push(client);
                self.report.stats.clients_parsed += 1;
            }
            Marker::RoutingTable => {
                let route = decode_routing_table(&fields).map_err(|e| {
                    warn!("Rejected line {}: {}", line_number, e);
                    Error::malformed(line_number, e)
                })?;
                trace!("Route '{}' on line {}", route.virtual_address, line_number);
                self.report.routes.push(route);
                self.report.stats.routes_parsed += 1;
            }
            Marker::Other => {
                self.report.stats.ignored_lines += 1;
                debug!("Ignoring line {} with marker {:?}", line_number, marker);
            }
        }

        Ok(Flow::Continue)
    }
}

/// Parse a status stream with the default configuration
pub fn parse_status<R: BufRead>(reader: R) -> Result<StatusReport> {
    parse_status_with_config(reader, &ParserConfig::default())
}

/// Parse a status stream with the given configuration
pub fn parse_status_with_config<R: BufRead>(
    reader: R,
    config: &ParserConfig,
) -> Result<StatusReport> {
    let mut scanner = StatusScanner::with_config(reader, config.clone())?;
    scanner.scan()?;
    Ok(scanner.into_report())
}

/// Open and parse a status file.
///
/// An open failure is reported as [`Error::StreamUnavailable`] before any
/// line is read.
pub fn parse_status_file(path: impl AsRef<Path>) -> Result<StatusReport> {
    parse_status_file_with_config(path, &ParserConfig::default())
}

/// Open and parse a status file with the given configuration
pub fn parse_status_file_with_config(
    path: impl AsRef<Path>,
    config: &ParserConfig,
) -> Result<StatusReport> {
    let path = path.as_ref();
    info!("Parsing status file: {}", path.display());

    let file = File::open(path).map_err(|e| Error::stream_unavailable(path, e))?;
    let report = parse_status_with_config(BufReader::new(file), config)?;

    info!(
        "Parsed {} clients and {} routes from {} lines",
        report.stats.clients_parsed, report.stats.routes_parsed, report.stats.lines_read
    );
    Ok(report)
}
