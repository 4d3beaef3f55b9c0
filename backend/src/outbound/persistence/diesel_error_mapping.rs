//! Shared Diesel error mapping for the persistence adapters.
//!
//! Every underlying failure is translated into a port error carrying the
//! original message; nothing is suppressed.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub(crate) fn map_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map common Diesel error variants into query/connection constructors.
///
/// `NotFound` never reaches this mapping on read paths (adapters use
/// `.optional()`), so it maps to a query error like other unexpected
/// variants.
pub(crate) fn map_diesel_error<E, Q, C>(error: diesel::result::Error, query: Q, connection: C) -> E
where
    Q: Fn(String) -> E,
    C: Fn(String) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(
            error_type = %std::any::type_name_of_val(other),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            connection(info.message().to_owned())
        }
        DieselError::DatabaseError(_, info) => query(info.message().to_owned()),
        other => query(other.to_string()),
    }
}

/// Like [`map_diesel_error`], but routes foreign-key violations to their own
/// constructor so callers can explain a missing referenced record.
pub(crate) fn map_diesel_error_with_fk<E, Q, C, F>(
    error: diesel::result::Error,
    query: Q,
    connection: C,
    foreign_key: F,
) -> E
where
    Q: Fn(String) -> E,
    C: Fn(String) -> E,
    F: FnOnce(String) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    if let DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) = &error {
        debug!(message = info.message(), "foreign key violation");
        return foreign_key(info.message().to_owned());
    }
    map_diesel_error(error, query, connection)
}
