//! Scan statistics and result structures
//!
//! This module provides the counters a scan keeps while classifying lines and
//! the report handed back to the caller.

use serde::Serialize;

use crate::app::models::{ClientInfo, RoutingInfo};

/// Result of a status scan: records in input order plus statistics
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusReport {
    /// Decoded CLIENT_LIST records
    pub clients: Vec<ClientInfo>,

    /// Decoded ROUTING_TABLE records
    pub routes: Vec<RoutingInfo>,

    /// Line classification counters
    pub stats: ScanStats,
}

impl StatusReport {
    /// True when neither clients nor routes were decoded
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty() && self.routes.is_empty()
    }
}

/// Line counters for a single scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Lines read from the stream, including the one that failed to decode
    pub lines_read: usize,

    /// HEADER lines skipped
    pub header_lines: usize,

    /// END lines seen
    pub end_markers: usize,

    /// Lines with an unrecognized marker (empty lines included)
    pub ignored_lines: usize,

    /// CLIENT_LIST records decoded
    pub clients_parsed: usize,

    /// ROUTING_TABLE records decoded
    pub routes_parsed: usize,

    /// Scan ended at an END line rather than end of stream
    pub stopped_at_end: bool,
}

impl ScanStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records decoded across both kinds
    pub fn records_parsed(&self) -> usize {
        self.clients_parsed + self.routes_parsed
    }
}
