//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ReservationCommand, ReservationQuery, UsersQuery, WorkshopsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Reservation mutations.
    pub reservations: Arc<dyn ReservationCommand>,
    /// Reservation reads.
    pub reservations_query: Arc<dyn ReservationQuery>,
    /// User list reads.
    pub users: Arc<dyn UsersQuery>,
    /// Workshop list reads.
    pub workshops: Arc<dyn WorkshopsQuery>,
}

impl HttpState {
    /// Construct state from the four port implementations.
    #[must_use]
    pub fn new(
        reservations: Arc<dyn ReservationCommand>,
        reservations_query: Arc<dyn ReservationQuery>,
        users: Arc<dyn UsersQuery>,
        workshops: Arc<dyn WorkshopsQuery>,
    ) -> Self {
        Self {
            reservations,
            reservations_query,
            users,
            workshops,
        }
    }
}
