//! Diesel row structs used by the persistence adapters.
//!
//! Rows are internal to the outbound layer; adapters convert them into
//! domain types before anything crosses a port boundary.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{User, Workshop};

use super::schema::{reservation_summary, reservations, users, workshops};

/// Queryable row for users.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub user_id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            user_id: row.user_id,
            full_name: row.full_name,
            email: row.email,
            phone: row.phone,
            created_at: row.created_at,
        }
    }
}

/// Queryable row for workshops.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = workshops)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct WorkshopRow {
    pub workshop_id: i32,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub duration_minutes: i32,
    pub capacity: i32,
    pub instructor_id: i32,
}

impl From<WorkshopRow> for Workshop {
    fn from(row: WorkshopRow) -> Self {
        Self {
            workshop_id: row.workshop_id,
            title: row.title,
            description: row.description,
            date: row.date,
            duration_minutes: row.duration_minutes,
            capacity: row.capacity,
            instructor_id: row.instructor_id,
        }
    }
}

/// Queryable row for reservations. Status stays raw text until the adapter
/// parses it into the domain enum.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = reservations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ReservationRow {
    pub reservation_id: i32,
    pub user_id: i32,
    pub workshop_id: i32,
    pub reservation_date: DateTime<Utc>,
    pub status: String,
    pub attended: bool,
}

/// Insertable row for reservation creation.
///
/// `None` fields are omitted from the insert so the column defaults apply
/// (status `PENDING`, attended `false`, reservation date `now()`).
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reservations)]
pub(crate) struct NewReservationRow<'a> {
    pub user_id: i32,
    pub workshop_id: i32,
    pub reservation_date: Option<DateTime<Utc>>,
    pub status: Option<&'a str>,
    pub attended: Option<bool>,
}

/// Changeset for partial reservation updates. `None` fields are left
/// untouched by Diesel's changeset generation.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = reservations)]
pub(crate) struct ReservationChangeset<'a> {
    pub reservation_date: Option<DateTime<Utc>>,
    pub status: Option<&'a str>,
    pub attended: Option<bool>,
    pub user_id: Option<i32>,
    pub workshop_id: Option<i32>,
}

/// Queryable row for the `reservation_summary` view.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = reservation_summary)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ReservationSummaryRow {
    pub reservation_id: i32,
    pub user: String,
    pub email: String,
    pub workshop: String,
    pub date: DateTime<Utc>,
    pub status: String,
    pub attended: bool,
    pub duration: i32,
    pub instructor: String,
}
