//! Workshop listing service implementing the [`WorkshopsQuery`] driving port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{WorkshopRepository, WorkshopRepositoryError, WorkshopsQuery};
use crate::domain::{Error, Workshop};

fn map_repository_error(error: WorkshopRepositoryError) -> Error {
    match error {
        WorkshopRepositoryError::Connection { message } => {
            Error::internal("workshop repository unavailable").with_details(message)
        }
        WorkshopRepositoryError::Query { message } => {
            Error::internal("workshop repository error").with_details(message)
        }
    }
}

/// Workshop listing service backed by a workshop repository.
#[derive(Clone)]
pub struct WorkshopsQueryService<R> {
    workshop_repo: Arc<R>,
}

impl<R> WorkshopsQueryService<R> {
    /// Create a new service over the workshop repository.
    pub const fn new(workshop_repo: Arc<R>) -> Self {
        Self { workshop_repo }
    }
}

#[async_trait]
impl<R> WorkshopsQuery for WorkshopsQueryService<R>
where
    R: WorkshopRepository,
{
    async fn list_workshops(&self) -> Result<Vec<Workshop>, Error> {
        self.workshop_repo.list().await.map_err(map_repository_error)
    }
}
