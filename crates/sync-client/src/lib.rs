//! Typed API client and cached collection state for the atelier
//! reservations backend.
//!
//! Three pieces:
//!
//! - [`client::ApiClient`] — reqwest-backed, typed access to every endpoint
//!   with a per-request timeout and a status/transport/decode error
//!   taxonomy.
//! - [`fetch::Collection`] — a cached, refreshable mirror of one server
//!   collection (users, workshops, reservation summaries) with
//!   loading/error state and supersede-safe refresh.
//! - [`mutation`] — per-call state for create/update/delete round trips.

pub mod client;
pub mod fetch;
pub mod mutation;
pub mod types;

pub use client::{ApiClient, ClientError};
pub use fetch::{Collection, Fetch};
pub use mutation::{CreateReservation, DeleteReservation, UpdateReservation};
