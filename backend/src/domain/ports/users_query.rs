//! Driving port for user list reads.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Domain use-case port for listing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return all users, most recently created first.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
