//! Fixed-position decoders for CLIENT_LIST and ROUTING_TABLE lines
//!
//! Each decoder takes the full field sequence of a line, marker included at
//! position 0, checks the length up front and converts the integer and
//! timestamp columns. A record is either fully decoded or rejected.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::app::models::{ClientInfo, RecordKind, RoutingInfo};
use crate::constants::{
    CLIENT_LIST_FIELD_COUNT, ROUTING_TABLE_FIELD_COUNT, client_fields, routing_fields,
};
use crate::error::DecodeError;

/// Decode the fields of a CLIENT_LIST line
pub fn decode_client_list(fields: &[&str]) -> Result<ClientInfo, DecodeError> {
    let kind = RecordKind::ClientList;
    require_field_count(fields, kind, CLIENT_LIST_FIELD_COUNT)?;

    let bytes_received =
        parse_integer(fields, kind, client_fields::BYTES_RECEIVED, "bytes_received")?;
    let bytes_sent = parse_integer(fields, kind, client_fields::BYTES_SENT, "bytes_sent")?;
    let connected_since = parse_epoch(
        fields,
        kind,
        client_fields::CONNECTED_SINCE_EPOCH,
        "connected_since",
    )?;
    let client_id = parse_integer(fields, kind, client_fields::CLIENT_ID, "client_id")?;
    let peer_id = parse_integer(fields, kind, client_fields::PEER_ID, "peer_id")?;

    Ok(ClientInfo {
        name: fields[client_fields::NAME].to_string(),
        real_address: fields[client_fields::REAL_ADDRESS].to_string(),
        virtual_address: fields[client_fields::VIRTUAL_ADDRESS].to_string(),
        virtual_v6_address: fields[client_fields::VIRTUAL_V6_ADDRESS].to_string(),
        bytes_received,
        bytes_sent,
        connected_since,
        username: fields[client_fields::USERNAME].to_string(),
        client_id,
        peer_id,
        data_channel_cipher: fields[client_fields::DATA_CHANNEL_CIPHER].to_string(),
    })
}

/// Decode the fields of a ROUTING_TABLE line
pub fn decode_routing_table(fields: &[&str]) -> Result<RoutingInfo, DecodeError> {
    let kind = RecordKind::RoutingTable;
    require_field_count(fields, kind, ROUTING_TABLE_FIELD_COUNT)?;

    let last_ref = parse_epoch(fields, kind, routing_fields::LAST_REF_EPOCH, "last_ref")?;

    Ok(RoutingInfo {
        virtual_address: fields[routing_fields::VIRTUAL_ADDRESS].to_string(),
        common_name: fields[routing_fields::COMMON_NAME].to_string(),
        real_address: fields[routing_fields::REAL_ADDRESS].to_string(),
        last_ref,
    })
}

// Extra trailing fields are tolerated; only a short line is rejected.
fn require_field_count(
    fields: &[&str],
    kind: RecordKind,
    expected: usize,
) -> Result<(), DecodeError> {
    if fields.len() < expected {
        return Err(DecodeError::TooFewFields {
            kind,
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

fn parse_integer<T>(
    fields: &[&str],
    kind: RecordKind,
    index: usize,
    field: &'static str,
) -> Result<T, DecodeError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    let value = fields[index];
    value.parse::<T>().map_err(|source| DecodeError::InvalidInteger {
        kind,
        field,
        value: value.to_string(),
        source,
    })
}

/// Parse an epoch seconds column into a UTC instant with no sub-second part
fn parse_epoch(
    fields: &[&str],
    kind: RecordKind,
    index: usize,
    field: &'static str,
) -> Result<DateTime<Utc>, DecodeError> {
    let seconds: i64 = parse_integer(fields, kind, index, field)?;
    DateTime::from_timestamp(seconds, 0).ok_or(DecodeError::TimestampOutOfRange {
        kind,
        field,
        seconds,
    })
}
