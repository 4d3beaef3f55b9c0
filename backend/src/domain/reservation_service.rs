//! Reservation domain services.
//!
//! These services implement the reservation driving ports. Identifier
//! validation happens here, before any repository call; absence is reported
//! by the repository's conditional mutations rather than a separate
//! existence read.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    ReservationCommand, ReservationQuery, ReservationRepository, ReservationRepositoryError,
};
use crate::domain::{
    Error, NewReservation, Reservation, ReservationDetail, ReservationPatch, ReservationSummary,
};

fn map_repository_error(error: ReservationRepositoryError) -> Error {
    match error {
        ReservationRepositoryError::Connection { message } => {
            Error::internal("reservation repository unavailable").with_details(message)
        }
        ReservationRepositoryError::Query { message } => {
            Error::internal("reservation repository error").with_details(message)
        }
        ReservationRepositoryError::ForeignKey { message } => {
            Error::internal("referenced user or workshop does not exist").with_details(message)
        }
    }
}

fn validate_reservation_id(reservation_id: i32) -> Result<(), Error> {
    if reservation_id < 1 {
        return Err(Error::invalid_request(
            "reservation id must be a positive integer",
        ));
    }
    Ok(())
}

fn validate_reference(value: i32, field: &str) -> Result<(), Error> {
    if value < 1 {
        return Err(Error::invalid_request(format!(
            "{field} must be a positive integer"
        )));
    }
    Ok(())
}

/// Reservation service implementing the command driving port.
#[derive(Clone)]
pub struct ReservationCommandService<R> {
    reservation_repo: Arc<R>,
}

impl<R> ReservationCommandService<R> {
    /// Create a new command service over the reservation repository.
    pub const fn new(reservation_repo: Arc<R>) -> Self {
        Self { reservation_repo }
    }
}

#[async_trait]
impl<R> ReservationCommand for ReservationCommandService<R>
where
    R: ReservationRepository,
{
    async fn create(&self, reservation: NewReservation) -> Result<Reservation, Error> {
        validate_reference(reservation.user_id, "user_id")?;
        validate_reference(reservation.workshop_id, "workshop_id")?;

        self.reservation_repo
            .create(&reservation)
            .await
            .map_err(map_repository_error)
    }

    async fn update(
        &self,
        reservation_id: i32,
        patch: ReservationPatch,
    ) -> Result<Reservation, Error> {
        validate_reservation_id(reservation_id)?;
        if let Some(user_id) = patch.user_id {
            validate_reference(user_id, "user_id")?;
        }
        if let Some(workshop_id) = patch.workshop_id {
            validate_reference(workshop_id, "workshop_id")?;
        }

        self.reservation_repo
            .update(reservation_id, &patch)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("reservation {reservation_id} not found")))
    }

    async fn delete(&self, reservation_id: i32) -> Result<(), Error> {
        validate_reservation_id(reservation_id)?;

        let removed = self
            .reservation_repo
            .delete(reservation_id)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            return Err(Error::not_found(format!(
                "reservation {reservation_id} not found"
            )));
        }
        Ok(())
    }
}

/// Reservation service implementing the query driving port.
#[derive(Clone)]
pub struct ReservationQueryService<R> {
    reservation_repo: Arc<R>,
}

impl<R> ReservationQueryService<R> {
    /// Create a new query service over the reservation repository.
    pub const fn new(reservation_repo: Arc<R>) -> Self {
        Self { reservation_repo }
    }
}

#[async_trait]
impl<R> ReservationQuery for ReservationQueryService<R>
where
    R: ReservationRepository,
{
    async fn get(&self, reservation_id: i32) -> Result<ReservationDetail, Error> {
        validate_reservation_id(reservation_id)?;

        self.reservation_repo
            .find_detail(reservation_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("reservation {reservation_id} not found")))
    }

    async fn list_summaries(&self) -> Result<Vec<ReservationSummary>, Error> {
        self.reservation_repo
            .list_summaries()
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "reservation_service_tests.rs"]
mod tests;
