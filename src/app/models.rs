//! Core data models for OpenVPN status records
//!
//! Both record types are plain values built by the decoders. They carry no
//! identity beyond their fields; correlating a client with its routes (by
//! common name or virtual address) is left to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::markers;

/// Record schema a status line is decoded with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    ClientList,
    RoutingTable,
}

impl RecordKind {
    /// Marker string as it appears in the status log
    pub fn marker(&self) -> &'static str {
        match self {
            RecordKind::ClientList => markers::CLIENT_LIST,
            RecordKind::RoutingTable => markers::ROUTING_TABLE,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// One connected client session (a CLIENT_LIST line)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Certificate common name, not guaranteed unique
    pub name: String,

    /// Public address and port the client connects from
    pub real_address: String,

    /// Tunnel IPv4 address
    pub virtual_address: String,

    /// Tunnel IPv6 address, empty when none is assigned
    pub virtual_v6_address: String,

    /// Cumulative bytes received from the client
    pub bytes_received: u64,

    /// Cumulative bytes sent to the client
    pub bytes_sent: u64,

    /// Connection start, from the epoch seconds column
    pub connected_since: DateTime<Utc>,

    /// Authenticated username, `UNDEF` when no user/pass auth is used
    pub username: String,

    /// Server-assigned id, unique within one daemon run
    pub client_id: u64,

    /// Data channel peer id
    pub peer_id: u64,

    /// Negotiated data channel cipher, e.g. `AES-256-GCM`
    pub data_channel_cipher: String,
}

impl ClientInfo {
    /// Connection start as Unix epoch seconds
    pub fn connected_since_epoch(&self) -> i64 {
        self.connected_since.timestamp()
    }
}

/// One routing table entry (a ROUTING_TABLE line)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingInfo {
    /// Tunnel address (or network) routed to the client
    pub virtual_address: String,

    /// Common name of the client owning the route
    pub common_name: String,

    /// Public address and port of the owning client
    pub real_address: String,

    /// Last time the route was used, from the epoch seconds column
    pub last_ref: DateTime<Utc>,
}

impl RoutingInfo {
    /// Last reference as Unix epoch seconds
    pub fn last_ref_epoch(&self) -> i64 {
        self.last_ref.timestamp()
    }
}
