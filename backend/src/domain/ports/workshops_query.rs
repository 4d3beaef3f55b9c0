//! Driving port for workshop list reads.

use async_trait::async_trait;

use crate::domain::{Error, Workshop};

/// Domain use-case port for listing workshops.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkshopsQuery: Send + Sync {
    /// Return all workshops, earliest scheduled first.
    async fn list_workshops(&self) -> Result<Vec<Workshop>, Error>;
}
