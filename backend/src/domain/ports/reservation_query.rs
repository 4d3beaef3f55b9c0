//! Driving port for reservation reads.

use async_trait::async_trait;

use crate::domain::{Error, ReservationDetail, ReservationSummary};

/// Domain use-case port for reading reservations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationQuery: Send + Sync {
    /// Fetch one reservation joined with its user and workshop.
    async fn get(&self, reservation_id: i32) -> Result<ReservationDetail, Error>;

    /// Read all summary rows; an empty collection is a successful outcome.
    async fn list_summaries(&self) -> Result<Vec<ReservationSummary>, Error>;
}
