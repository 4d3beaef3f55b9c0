//! Wire types exchanged with the reservations backend.
//!
//! Field names mirror the server's JSON exactly; everything is snake_case
//! on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a reservation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    /// Booked but not yet confirmed.
    #[default]
    Pending,
    /// Confirmed attendance.
    Confirmed,
    /// Cancelled.
    Cancelled,
}

/// Registered workshop attendee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable user identifier.
    pub user_id: i32,
    /// Full name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Optional contact phone.
    pub phone: Option<String>,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A scheduled art workshop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workshop {
    /// Stable workshop identifier.
    pub workshop_id: i32,
    /// Workshop title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Scheduled start.
    pub date: DateTime<Utc>,
    /// Session length in minutes.
    pub duration_minutes: i32,
    /// Maximum attendees.
    pub capacity: i32,
    /// Instructor reference.
    pub instructor_id: i32,
}

/// A reservation row as returned by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Stable reservation identifier.
    pub reservation_id: i32,
    /// Attendee reference.
    pub user_id: i32,
    /// Workshop reference.
    pub workshop_id: i32,
    /// When the reservation was placed.
    pub reservation_date: DateTime<Utc>,
    /// Lifecycle status.
    pub status: ReservationStatus,
    /// Attendance flag.
    pub attended: bool,
}

/// A reservation joined with its full user and workshop records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDetail {
    /// The reservation row, flattened into the envelope.
    #[serde(flatten)]
    pub reservation: Reservation,
    /// The referenced user record.
    pub user: User,
    /// The referenced workshop record.
    pub workshop: Workshop,
}

/// Denormalised summary row joining reservation, user, workshop, and
/// instructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationSummary {
    /// Underlying reservation identifier.
    pub reservation_id: i32,
    /// Attendee full name.
    pub user: String,
    /// Attendee email.
    pub email: String,
    /// Workshop title.
    pub workshop: String,
    /// Reservation timestamp.
    pub date: DateTime<Utc>,
    /// Lifecycle status.
    pub status: ReservationStatus,
    /// Attendance flag.
    pub attended: bool,
    /// Workshop length in minutes.
    pub duration: i32,
    /// Instructor full name.
    pub instructor: String,
}

/// Parameters for creating a reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReservationParams {
    /// Attendee reference.
    pub user_id: i32,
    /// Workshop reference.
    pub workshop_id: i32,
    /// Explicit reservation timestamp; server default when absent.
    pub date: Option<DateTime<Utc>>,
    /// Initial status; `PENDING` when absent.
    pub status: Option<ReservationStatus>,
    /// Initial attendance flag; `false` when absent.
    pub attended: Option<bool>,
}

/// Parameters for partially updating a reservation. Absent fields keep
/// their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReservationParams {
    /// New reservation timestamp.
    pub reservation_date: Option<DateTime<Utc>>,
    /// New lifecycle status.
    pub status: Option<ReservationStatus>,
    /// New attendance flag.
    pub attended: Option<bool>,
    /// Re-point at another user.
    pub user_id: Option<i32>,
    /// Re-point at another workshop.
    pub workshop_id: Option<i32>,
}
