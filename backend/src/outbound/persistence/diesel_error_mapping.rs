//! Translation of pool and Diesel failures into [`DataAccessError`].

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::DataAccessError;

use super::pool::PoolError;

/// Map a pool failure to a connection error carrying the pool's message.
pub(crate) fn map_pool_error(error: PoolError) -> DataAccessError {
    debug!(%error, "database pool checkout failed");
    DataAccessError::connection("could not open a database connection", error.message())
}

/// Map a Diesel failure, keeping the database's own message as the cause.
pub(crate) fn map_diesel_error(error: DieselError) -> DataAccessError {
    match &error {
        DieselError::DatabaseError(kind, info) => debug!(
            ?kind,
            message = info.message(),
            constraint = ?info.constraint_name(),
            "diesel operation failed"
        ),
        other => debug!(%other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            DataAccessError::unique_violation(
                info.constraint_name().unwrap_or("unknown"),
                info.message(),
            )
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            DataAccessError::connection("database connection closed", info.message())
        }
        DieselError::DatabaseError(_, info) => {
            DataAccessError::statement("could not execute statement", info.message())
        }
        DieselError::NotFound => {
            DataAccessError::statement("no row matched the statement", "record not found")
        }
        other => DataAccessError::statement("could not execute statement", other.to_string()),
    }
}
