//! OpenVPN Status Library
//!
//! Parses the status log written by an OpenVPN server (`--status` with
//! status-version 2) into typed records.
//!
//! This library provides:
//! - A field splitter for the comma-delimited line format
//! - Decoders for `CLIENT_LIST` and `ROUTING_TABLE` lines with strict integer
//!   and timestamp validation
//! - A single-pass scanner that collects clients and routes in input order
//!
//! Timestamps are taken from the epoch seconds columns and expressed in UTC.
//!
//! ```rust
//! use ovpn_status::parse_status;
//!
//! let log = "CLIENT_LIST,alice,1.2.3.4:1194,10.8.0.2,,1000,2000,Mon Jan  1 00:00:00 2024,1704067200,alice,5,6,AES-256-GCM\n";
//! let report = parse_status(log.as_bytes())?;
//! assert_eq!(report.clients[0].name, "alice");
//! # Ok::<(), ovpn_status::Error>(())
//! ```

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod status_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ClientInfo, RecordKind, RoutingInfo};
pub use app::services::status_parser::{
    Marker, ScanStats, StatusReport, StatusScanner, decode_client_list, decode_routing_table,
    parse_status, parse_status_file, parse_status_file_with_config, parse_status_with_config,
    split_fields,
};
pub use config::{EndMarkerPolicy, ParserConfig};
pub use error::{DecodeError, Error, Result};
