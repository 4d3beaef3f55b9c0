//! Workshop data model.
//!
//! Workshops are read-only in this service: the admin API lists them but
//! exposes no mutation. Rows arrive via seeding or external tooling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A scheduled art workshop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Workshop {
    /// Stable workshop identifier
    #[schema(example = 1)]
    pub workshop_id: i32,
    /// Workshop title
    #[schema(example = "Watercolour Basics")]
    pub title: String,
    /// Longer description shown to attendees
    pub description: String,
    /// Scheduled start
    pub date: DateTime<Utc>,
    /// Session length in minutes
    #[schema(example = 90)]
    pub duration_minutes: i32,
    /// Maximum number of attendees
    #[schema(example = 12)]
    pub capacity: i32,
    /// Reference to the instructor running the session
    pub instructor_id: i32,
}
