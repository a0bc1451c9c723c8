//! OpenVPN status log parser
//!
//! This module turns the lines of a status log into typed client and routing
//! records. Lines are processed in a single pass and in order; the first
//! malformed record line aborts the scan.
//!
//! ## Architecture
//!
//! - [`field_splitter`] - Delimited field splitting
//! - [`record_decoders`] - Fixed-position CLIENT_LIST / ROUTING_TABLE decoding
//! - [`scanner`] - Line classification, dispatch and accumulation
//! - [`stats`] - Scan statistics and the result structure
//!
//! ## Usage
//!
//! ```rust
//! use ovpn_status::app::services::status_parser::StatusScanner;
//!
//! let log = "HEADER,ROUTING_TABLE,Virtual Address,Common Name,Real Address,Last Ref,Last Ref (time_t)\n\
//!            ROUTING_TABLE,10.8.0.2,alice,1.2.3.4:1194,Mon Jan  1 00:00:00 2024,1704067200\n";
//!
//! let mut scanner = StatusScanner::new(log.as_bytes());
//! scanner.scan()?;
//! let report = scanner.into_report();
//!
//! println!("Parsed {} routes from {} lines",
//!          report.stats.routes_parsed,
//!          report.stats.lines_read);
//! # Ok::<(), ovpn_status::Error>(())
//! ```

pub mod field_splitter;
pub mod record_decoders;
pub mod scanner;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use field_splitter::split_fields;
pub use record_decoders::{decode_client_list, decode_routing_table};
pub use scanner::{
    Marker, StatusScanner, parse_status, parse_status_file, parse_status_file_with_config,
    parse_status_with_config,
};
pub use stats::{ScanStats, StatusReport};
