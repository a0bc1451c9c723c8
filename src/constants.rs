//! Application constants for the OpenVPN status parser
//!
//! Record markers, the default field delimiter and the fixed field counts of
//! each record schema.

// =============================================================================
// Record Markers
// =============================================================================

/// Leading field values that identify the schema of a status line
pub mod markers {
    /// Column description line, carries no data
    pub const HEADER: &str = "HEADER";

    /// End-of-records marker
    pub const END: &str = "END";

    /// Connected client session
    pub const CLIENT_LIST: &str = "CLIENT_LIST";

    /// Routing table entry
    pub const ROUTING_TABLE: &str = "ROUTING_TABLE";
}

// =============================================================================
// Field Layout
// =============================================================================

/// Delimiter used by the status log (status-version 2)
pub const DEFAULT_DELIMITER: &str = ",";

/// Number of fields in a CLIENT_LIST line, marker included
pub const CLIENT_LIST_FIELD_COUNT: usize = 13;

/// Number of fields in a ROUTING_TABLE line, marker included
pub const ROUTING_TABLE_FIELD_COUNT: usize = 6;

/// CLIENT_LIST field positions
pub mod client_fields {
    pub const NAME: usize = 1;
    pub const REAL_ADDRESS: usize = 2;
    pub const VIRTUAL_ADDRESS: usize = 3;
    pub const VIRTUAL_V6_ADDRESS: usize = 4;
    pub const BYTES_RECEIVED: usize = 5;
    pub const BYTES_SENT: usize = 6;
    // 7 is the human-readable "Connected Since" string, not decoded
    pub const CONNECTED_SINCE_EPOCH: usize = 8;
    pub const USERNAME: usize = 9;
    pub const CLIENT_ID: usize = 10;
    pub const PEER_ID: usize = 11;
    pub const DATA_CHANNEL_CIPHER: usize = 12;
}

/// ROUTING_TABLE field positions
pub mod routing_fields {
    pub const VIRTUAL_ADDRESS: usize = 1;
    pub const COMMON_NAME: usize = 2;
    pub const REAL_ADDRESS: usize = 3;
    // 4 is the human-readable "Last Ref" string, not decoded
    pub const LAST_REF_EPOCH: usize = 5;
}

// =============================================================================
// Logging
// =============================================================================

/// Target used for the default `EnvFilter` directive
pub const LOG_TARGET: &str = "ovpn_status";
