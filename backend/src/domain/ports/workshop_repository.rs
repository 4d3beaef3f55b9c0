//! Port for workshop list reads.

use async_trait::async_trait;

use crate::domain::Workshop;

use super::define_port_error;

define_port_error! {
    /// Errors raised by workshop repository adapters.
    pub enum WorkshopRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "workshop repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "workshop repository query failed: {message}",
    }
}

/// Port for reading the workshop collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkshopRepository: Send + Sync {
    /// Read all workshops, earliest scheduled first.
    async fn list(&self) -> Result<Vec<Workshop>, WorkshopRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureWorkshopRepository;

#[async_trait]
impl WorkshopRepository for FixtureWorkshopRepository {
    async fn list(&self) -> Result<Vec<Workshop>, WorkshopRepositoryError> {
        Ok(Vec::new())
    }
}
