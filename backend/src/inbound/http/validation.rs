//! Shared validation helpers for inbound HTTP adapters.
//!
//! Identifier and payload parsing happens here, before any port call, so
//! malformed requests never reach the data store.

use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::domain::{Error, ReservationStatus};

/// Parse a path segment into a positive reservation identifier.
///
/// Rejects empty, non-numeric, non-positive, and overflowing values.
pub(crate) fn parse_reservation_id(raw: &str) -> Result<i32, Error> {
    let parsed = raw.trim().parse::<i32>().ok().filter(|id| *id >= 1);
    parsed.ok_or_else(|| {
        Error::invalid_request("invalid or missing reservation id")
            .with_details(format!("received {raw:?}"))
    })
}

/// Parse a wire status string into the domain enum.
pub(crate) fn parse_status(raw: &str) -> Result<ReservationStatus, Error> {
    ReservationStatus::from_str(raw).map_err(|err| {
        Error::invalid_request("status must be PENDING, CONFIRMED, or CANCELLED")
            .with_details(err.to_string())
    })
}

/// Parse an RFC 3339 timestamp from the wire.
pub(crate) fn parse_rfc3339_timestamp(raw: &str, field: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|_| {
            Error::invalid_request(format!("{field} must be an RFC 3339 timestamp"))
                .with_details(format!("received {raw:?}"))
        })
}

/// Require a field the wire format marks optional but the operation needs.
pub(crate) fn require_field<T>(value: Option<T>, field: &str) -> Result<T, Error> {
    value.ok_or_else(|| Error::invalid_request(format!("missing required field: {field}")))
}
