//! Driving port for reservation mutations.
//!
//! Inbound adapters call this port after translating wire payloads into
//! domain types; implementations validate identifiers and delegate to the
//! reservation repository.

use async_trait::async_trait;

use crate::domain::{Error, NewReservation, Reservation, ReservationPatch};

/// Domain use-case port for creating, updating, and deleting reservations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationCommand: Send + Sync {
    /// Create a reservation with defaults for omitted fields.
    async fn create(&self, reservation: NewReservation) -> Result<Reservation, Error>;

    /// Apply a partial update to an existing reservation.
    async fn update(
        &self,
        reservation_id: i32,
        patch: ReservationPatch,
    ) -> Result<Reservation, Error>;

    /// Delete an existing reservation.
    async fn delete(&self, reservation_id: i32) -> Result<(), Error>;
}
