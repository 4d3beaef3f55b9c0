//! PostgreSQL-backed `WorkshopRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::Workshop;
use crate::domain::ports::{WorkshopRepository, WorkshopRepositoryError};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::WorkshopRow;
use super::pool::{DbPool, PoolError};
use super::schema::workshops;

/// Diesel-backed implementation of the workshop repository port.
#[derive(Clone)]
pub struct DieselWorkshopRepository {
    pool: DbPool,
}

impl DieselWorkshopRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> WorkshopRepositoryError {
    map_pool_error(error, WorkshopRepositoryError::connection)
}

fn map_diesel(error: diesel::result::Error) -> WorkshopRepositoryError {
    map_diesel_error(
        error,
        WorkshopRepositoryError::query,
        WorkshopRepositoryError::connection,
    )
}

#[async_trait]
impl WorkshopRepository for DieselWorkshopRepository {
    async fn list(&self) -> Result<Vec<Workshop>, WorkshopRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let rows: Vec<WorkshopRow> = workshops::table
            .order(workshops::date.asc())
            .select(WorkshopRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel)?;

        Ok(rows.into_iter().map(Workshop::from).collect())
    }
}
