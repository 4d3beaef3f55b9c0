//! Embedded schema migrations.
//!
//! Migrations run once at boot over a short-lived synchronous connection,
//! before the async pool starts serving requests.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Errors raised while applying migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// Could not connect to the database.
    #[error("failed to connect for migrations: {0}")]
    Connection(#[from] diesel::ConnectionError),

    /// A migration failed to apply.
    #[error("failed to run migrations: {0}")]
    Apply(String),
}

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Apply all pending migrations against the given database.
///
/// # Errors
///
/// Returns [`MigrationError`] when the connection cannot be established or
/// a migration fails.
pub fn run_pending_migrations(database_url: &str) -> Result<(), MigrationError> {
    let mut conn = PgConnection::establish(database_url)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply(err.to_string()))?;
    info!(count = applied.len(), "applied pending migrations");
    Ok(())
}
