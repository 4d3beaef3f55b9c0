//! Port for user list reads.

use async_trait::async_trait;

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "user repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "user repository query failed: {message}",
    }
}

/// Port for reading the user collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Read all users, most recently created first.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_list_returns_empty() {
        let listed = FixtureUserRepository.list().await.expect("fixture list succeeds");
        assert!(listed.is_empty());
    }
}
