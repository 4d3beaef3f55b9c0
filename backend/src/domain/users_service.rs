//! User listing service implementing the [`UsersQuery`] driving port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UserRepositoryError, UsersQuery};
use crate::domain::{Error, User};

fn map_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::internal("user repository unavailable").with_details(message)
        }
        UserRepositoryError::Query { message } => {
            Error::internal("user repository error").with_details(message)
        }
    }
}

/// User listing service backed by a user repository.
#[derive(Clone)]
pub struct UsersQueryService<R> {
    user_repo: Arc<R>,
}

impl<R> UsersQueryService<R> {
    /// Create a new service over the user repository.
    pub const fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> UsersQuery for UsersQueryService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.user_repo.list().await.map_err(map_repository_error)
    }
}
