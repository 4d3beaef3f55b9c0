//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly. `reservation_summary`
//! is a database view, declared as a table so Diesel can type-check reads
//! against it; it must never appear in an insert or update.

diesel::table! {
    /// Workshop instructors.
    ///
    /// Never exposed by an endpoint; joined into the summary view.
    instructors (instructor_id) {
        /// Primary key.
        instructor_id -> Int4,
        /// Instructor full name.
        full_name -> Varchar,
        /// Teaching specialty.
        specialty -> Varchar,
    }
}

diesel::table! {
    /// Registered attendees.
    users (user_id) {
        /// Primary key.
        user_id -> Int4,
        /// Full name.
        full_name -> Varchar,
        /// Contact email.
        email -> Varchar,
        /// Optional contact phone.
        phone -> Nullable<Varchar>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Scheduled workshops.
    workshops (workshop_id) {
        /// Primary key.
        workshop_id -> Int4,
        /// Workshop title.
        title -> Varchar,
        /// Longer description.
        description -> Varchar,
        /// Scheduled start.
        date -> Timestamptz,
        /// Session length in minutes.
        duration_minutes -> Int4,
        /// Maximum attendees.
        capacity -> Int4,
        /// Foreign key to instructors.
        instructor_id -> Int4,
    }
}

diesel::table! {
    /// Reservations linking users to workshops.
    reservations (reservation_id) {
        /// Primary key.
        reservation_id -> Int4,
        /// Foreign key to users.
        user_id -> Int4,
        /// Foreign key to workshops.
        workshop_id -> Int4,
        /// When the reservation was placed.
        reservation_date -> Timestamptz,
        /// Lifecycle status stored as upper-case text.
        status -> Varchar,
        /// Attendance flag.
        attended -> Bool,
    }
}

diesel::table! {
    /// Denormalised read model over reservations, users, workshops, and
    /// instructors. Backed by the `reservation_summary` view.
    reservation_summary (reservation_id) {
        /// Underlying reservation id.
        reservation_id -> Int4,
        /// Attendee full name.
        user -> Varchar,
        /// Attendee email.
        email -> Varchar,
        /// Workshop title.
        workshop -> Varchar,
        /// Reservation timestamp.
        date -> Timestamptz,
        /// Lifecycle status stored as upper-case text.
        status -> Varchar,
        /// Attendance flag.
        attended -> Bool,
        /// Workshop length in minutes.
        duration -> Int4,
        /// Instructor full name.
        instructor -> Varchar,
    }
}

diesel::joinable!(reservations -> users (user_id));
diesel::joinable!(reservations -> workshops (workshop_id));
diesel::joinable!(workshops -> instructors (instructor_id));

diesel::allow_tables_to_appear_in_same_query!(instructors, users, workshops, reservations);
