//! Port for reservation persistence.
//!
//! Mutations are single conditional statements: `update` and `delete` report
//! row absence through their return value rather than relying on a prior
//! existence read, so there is no check-then-act window.

use async_trait::async_trait;

use crate::domain::{
    NewReservation, Reservation, ReservationDetail, ReservationPatch, ReservationSummary,
};

use super::define_port_error;

define_port_error! {
    /// Errors raised by reservation repository adapters.
    pub enum ReservationRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "reservation repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "reservation repository query failed: {message}",
        /// A referenced user or workshop does not exist.
        ForeignKey { message: String } =>
            "reservation references a missing record: {message}",
    }
}

/// Port for reservation reads and writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Insert a reservation, applying storage defaults for omitted fields.
    async fn create(
        &self,
        reservation: &NewReservation,
    ) -> Result<Reservation, ReservationRepositoryError>;

    /// Find a reservation by id, joined with its user and workshop records.
    async fn find_detail(
        &self,
        reservation_id: i32,
    ) -> Result<Option<ReservationDetail>, ReservationRepositoryError>;

    /// Apply a partial update in one conditional statement.
    ///
    /// Returns `None` when no row with that id exists.
    async fn update(
        &self,
        reservation_id: i32,
        patch: &ReservationPatch,
    ) -> Result<Option<Reservation>, ReservationRepositoryError>;

    /// Delete a reservation. Returns whether a row was removed.
    async fn delete(&self, reservation_id: i32) -> Result<bool, ReservationRepositoryError>;

    /// Read all summary rows, ordered by reservation id.
    async fn list_summaries(&self)
    -> Result<Vec<ReservationSummary>, ReservationRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReservationRepository;

#[async_trait]
impl ReservationRepository for FixtureReservationRepository {
    async fn create(
        &self,
        reservation: &NewReservation,
    ) -> Result<Reservation, ReservationRepositoryError> {
        Ok(Reservation {
            reservation_id: 1,
            user_id: reservation.user_id,
            workshop_id: reservation.workshop_id,
            reservation_date: reservation
                .reservation_date
                .unwrap_or_else(chrono::Utc::now),
            status: reservation.status.unwrap_or_default(),
            attended: reservation.attended.unwrap_or(false),
        })
    }

    async fn find_detail(
        &self,
        _reservation_id: i32,
    ) -> Result<Option<ReservationDetail>, ReservationRepositoryError> {
        Ok(None)
    }

    async fn update(
        &self,
        _reservation_id: i32,
        _patch: &ReservationPatch,
    ) -> Result<Option<Reservation>, ReservationRepositoryError> {
        Ok(None)
    }

    async fn delete(&self, _reservation_id: i32) -> Result<bool, ReservationRepositoryError> {
        Ok(false)
    }

    async fn list_summaries(
        &self,
    ) -> Result<Vec<ReservationSummary>, ReservationRepositoryError> {
        Ok(Vec::new())
    }
}
