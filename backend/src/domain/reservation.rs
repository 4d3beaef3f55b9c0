//! Reservation aggregate: lifecycle status, partial updates, and the
//! denormalised summary projection.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{User, Workshop};

/// Lifecycle status of a reservation.
///
/// Serialised in upper case on the wire and in storage (`PENDING`,
/// `CONFIRMED`, `CANCELLED`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    /// Booked but not yet confirmed by an administrator.
    #[default]
    Pending,
    /// Confirmed attendance.
    Confirmed,
    /// Cancelled by the attendee or an administrator.
    Cancelled,
}

impl ReservationStatus {
    /// Storage representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when parsing an unknown status value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown reservation status: {value}")]
pub struct ParseReservationStatusError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for ReservationStatus {
    type Err = ParseReservationStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(ParseReservationStatusError {
                value: other.to_owned(),
            }),
        }
    }
}

/// A booking linking one user to one workshop at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Reservation {
    /// Stable reservation identifier
    #[schema(example = 1)]
    pub reservation_id: i32,
    /// Attendee reference
    pub user_id: i32,
    /// Workshop reference
    pub workshop_id: i32,
    /// When the reservation was placed
    pub reservation_date: DateTime<Utc>,
    /// Lifecycle status
    pub status: ReservationStatus,
    /// Whether the attendee showed up
    pub attended: bool,
}

/// Payload for creating a reservation.
///
/// Omitted fields fall back to storage defaults: status `PENDING`, attended
/// `false`, reservation date `now()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    /// Attendee reference; must exist at insert time.
    pub user_id: i32,
    /// Workshop reference; must exist at insert time.
    pub workshop_id: i32,
    /// Explicit reservation timestamp, when supplied.
    pub reservation_date: Option<DateTime<Utc>>,
    /// Explicit initial status, when supplied.
    pub status: Option<ReservationStatus>,
    /// Explicit attendance flag, when supplied.
    pub attended: Option<bool>,
}

/// Partial update for a reservation.
///
/// Only fields carrying `Some` are written; everything else keeps its prior
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationPatch {
    /// New reservation timestamp.
    pub reservation_date: Option<DateTime<Utc>>,
    /// New lifecycle status.
    pub status: Option<ReservationStatus>,
    /// New attendance flag.
    pub attended: Option<bool>,
    /// Re-point the reservation at another user.
    pub user_id: Option<i32>,
    /// Re-point the reservation at another workshop.
    pub workshop_id: Option<i32>,
}

impl ReservationPatch {
    /// True when the patch carries no field at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reservation_date.is_none()
            && self.status.is_none()
            && self.attended.is_none()
            && self.user_id.is_none()
            && self.workshop_id.is_none()
    }
}

/// A reservation joined with its full user and workshop records.
///
/// Returned by single-reservation reads; the list endpoint uses the lighter
/// [`ReservationSummary`] projection instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReservationDetail {
    /// The reservation row itself, flattened into the envelope.
    #[serde(flatten)]
    pub reservation: Reservation,
    /// The referenced user record.
    pub user: User,
    /// The referenced workshop record.
    pub workshop: Workshop,
}

/// Denormalised, read-only row joining reservation, user, workshop, and
/// instructor for display. Recomputed on every read; it has no identity of
/// its own beyond the underlying reservation id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReservationSummary {
    /// Underlying reservation identifier
    pub reservation_id: i32,
    /// Attendee full name
    pub user: String,
    /// Attendee email
    pub email: String,
    /// Workshop title
    pub workshop: String,
    /// Reservation timestamp
    pub date: DateTime<Utc>,
    /// Lifecycle status
    pub status: ReservationStatus,
    /// Whether the attendee showed up
    pub attended: bool,
    /// Workshop length in minutes
    pub duration: i32,
    /// Instructor full name
    pub instructor: String,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("PENDING", ReservationStatus::Pending)]
    #[case("CONFIRMED", ReservationStatus::Confirmed)]
    #[case("CANCELLED", ReservationStatus::Cancelled)]
    fn status_parses_storage_representation(
        #[case] raw: &str,
        #[case] expected: ReservationStatus,
    ) {
        assert_eq!(raw.parse::<ReservationStatus>(), Ok(expected));
        assert_eq!(expected.as_str(), raw);
    }

    #[rstest]
    fn status_rejects_unknown_values() {
        let err = "pending".parse::<ReservationStatus>().expect_err("lower case is invalid");
        assert_eq!(err.value, "pending");
    }

    #[rstest]
    fn status_defaults_to_pending() {
        assert_eq!(ReservationStatus::default(), ReservationStatus::Pending);
    }

    #[rstest]
    fn status_serialises_upper_case() {
        let json = serde_json::to_string(&ReservationStatus::Confirmed).expect("serialise");
        assert_eq!(json, "\"CONFIRMED\"");
    }

    #[rstest]
    fn empty_patch_reports_empty() {
        assert!(ReservationPatch::default().is_empty());
        let patch = ReservationPatch {
            attended: Some(true),
            ..ReservationPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
