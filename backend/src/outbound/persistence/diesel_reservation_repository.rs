//! PostgreSQL-backed `ReservationRepository` implementation using Diesel ORM.
//!
//! Mutations are single conditional statements: updates use
//! `UPDATE ... RETURNING` and deletes report the affected-row count, so
//! absence is detected without a separate existence read.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ReservationRepository, ReservationRepositoryError};
use crate::domain::{
    NewReservation, Reservation, ReservationDetail, ReservationPatch, ReservationSummary,
};

use super::diesel_error_mapping::{map_diesel_error_with_fk, map_pool_error};
use super::models::{
    NewReservationRow, ReservationChangeset, ReservationRow, ReservationSummaryRow, UserRow,
    WorkshopRow,
};
use super::pool::{DbPool, PoolError};
use super::schema::{reservation_summary, reservations, users, workshops};

/// Diesel-backed implementation of the reservation repository port.
#[derive(Clone)]
pub struct DieselReservationRepository {
    pool: DbPool,
}

impl DieselReservationRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> ReservationRepositoryError {
    map_pool_error(error, ReservationRepositoryError::connection)
}

fn map_diesel(error: diesel::result::Error) -> ReservationRepositoryError {
    map_diesel_error_with_fk(
        error,
        ReservationRepositoryError::query,
        ReservationRepositoryError::connection,
        ReservationRepositoryError::foreign_key,
    )
}

/// Convert a database row into a domain reservation, parsing the stored
/// status text.
fn row_to_reservation(row: ReservationRow) -> Result<Reservation, ReservationRepositoryError> {
    let ReservationRow {
        reservation_id,
        user_id,
        workshop_id,
        reservation_date,
        status,
        attended,
    } = row;

    let status = status
        .parse()
        .map_err(|err: crate::domain::ParseReservationStatusError| {
            ReservationRepositoryError::query(err.to_string())
        })?;

    Ok(Reservation {
        reservation_id,
        user_id,
        workshop_id,
        reservation_date,
        status,
        attended,
    })
}

fn row_to_summary(
    row: ReservationSummaryRow,
) -> Result<ReservationSummary, ReservationRepositoryError> {
    let ReservationSummaryRow {
        reservation_id,
        user,
        email,
        workshop,
        date,
        status,
        attended,
        duration,
        instructor,
    } = row;

    let status = status
        .parse()
        .map_err(|err: crate::domain::ParseReservationStatusError| {
            ReservationRepositoryError::query(err.to_string())
        })?;

    Ok(ReservationSummary {
        reservation_id,
        user,
        email,
        workshop,
        date,
        status,
        attended,
        duration,
        instructor,
    })
}

#[async_trait]
impl ReservationRepository for DieselReservationRepository {
    async fn create(
        &self,
        reservation: &NewReservation,
    ) -> Result<Reservation, ReservationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let new_row = NewReservationRow {
            user_id: reservation.user_id,
            workshop_id: reservation.workshop_id,
            reservation_date: reservation.reservation_date,
            status: reservation.status.map(|status| status.as_str()),
            attended: reservation.attended,
        };

        let row = diesel::insert_into(reservations::table)
            .values(&new_row)
            .returning(ReservationRow::as_returning())
            .get_result::<ReservationRow>(&mut conn)
            .await
            .map_err(map_diesel)?;

        row_to_reservation(row)
    }

    async fn find_detail(
        &self,
        reservation_id: i32,
    ) -> Result<Option<ReservationDetail>, ReservationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let joined = reservations::table
            .inner_join(users::table)
            .inner_join(workshops::table)
            .filter(reservations::reservation_id.eq(reservation_id))
            .select((
                ReservationRow::as_select(),
                UserRow::as_select(),
                WorkshopRow::as_select(),
            ))
            .first::<(ReservationRow, UserRow, WorkshopRow)>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel)?;

        joined
            .map(|(reservation_row, user_row, workshop_row)| {
                Ok(ReservationDetail {
                    reservation: row_to_reservation(reservation_row)?,
                    user: user_row.into(),
                    workshop: workshop_row.into(),
                })
            })
            .transpose()
    }

    async fn update(
        &self,
        reservation_id: i32,
        patch: &ReservationPatch,
    ) -> Result<Option<Reservation>, ReservationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        // An empty patch has nothing to write; read the current row so the
        // caller still distinguishes present from absent.
        if patch.is_empty() {
            let row = reservations::table
                .find(reservation_id)
                .select(ReservationRow::as_select())
                .first::<ReservationRow>(&mut conn)
                .await
                .optional()
                .map_err(map_diesel)?;
            return row.map(row_to_reservation).transpose();
        }

        let changeset = ReservationChangeset {
            reservation_date: patch.reservation_date,
            status: patch.status.map(|status| status.as_str()),
            attended: patch.attended,
            user_id: patch.user_id,
            workshop_id: patch.workshop_id,
        };

        let row = diesel::update(reservations::table.find(reservation_id))
            .set(&changeset)
            .returning(ReservationRow::as_returning())
            .get_result::<ReservationRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel)?;

        row.map(row_to_reservation).transpose()
    }

    async fn delete(&self, reservation_id: i32) -> Result<bool, ReservationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let removed = diesel::delete(reservations::table.find(reservation_id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel)?;

        Ok(removed > 0)
    }

    async fn list_summaries(
        &self,
    ) -> Result<Vec<ReservationSummary>, ReservationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let rows: Vec<ReservationSummaryRow> = reservation_summary::table
            .order(reservation_summary::reservation_id.asc())
            .select(ReservationSummaryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel)?;

        rows.into_iter().map(row_to_summary).collect()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and row conversion edge cases.

    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::ReservationStatus;

    #[fixture]
    fn valid_row() -> ReservationRow {
        ReservationRow {
            reservation_id: 1,
            user_id: 2,
            workshop_id: 3,
            reservation_date: Utc
                .with_ymd_and_hms(2026, 3, 14, 10, 0, 0)
                .single()
                .expect("timestamp"),
            status: "CONFIRMED".to_owned(),
            attended: true,
        }
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let repo_err = map_pool(PoolError::checkout("connection refused"));

        assert!(matches!(
            repo_err,
            ReservationRepositoryError::Connection { .. }
        ));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn row_conversion_parses_stored_status(valid_row: ReservationRow) {
        let reservation = row_to_reservation(valid_row).expect("valid row converts");

        assert_eq!(reservation.status, ReservationStatus::Confirmed);
        assert!(reservation.attended);
    }

    #[rstest]
    fn row_conversion_rejects_unknown_status(mut valid_row: ReservationRow) {
        valid_row.status = "confirmed".to_owned();

        let error = row_to_reservation(valid_row).expect_err("unknown status must fail");
        assert!(matches!(error, ReservationRepositoryError::Query { .. }));
        assert!(error.to_string().contains("confirmed"));
    }

    #[rstest]
    fn summary_row_conversion_rejects_unknown_status() {
        let row = ReservationSummaryRow {
            reservation_id: 1,
            user: "Ada Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            workshop: "Watercolour Basics".to_owned(),
            date: Utc
                .with_ymd_and_hms(2026, 3, 14, 10, 0, 0)
                .single()
                .expect("timestamp"),
            status: "UNKNOWN".to_owned(),
            attended: false,
            duration: 90,
            instructor: "Hilma af Klint".to_owned(),
        };

        let error = row_to_summary(row).expect_err("unknown status must fail");
        assert!(matches!(error, ReservationRepositoryError::Query { .. }));
    }
}
