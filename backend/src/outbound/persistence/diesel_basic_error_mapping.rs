//! Shared Diesel error mapping for every store adapter.
//!
//! Each store port declares its error enum with `define_store_error!`, so the
//! helpers here build any of them through [`StoreError`].

use tracing::debug;

use crate::domain::ports::StoreError;

use super::pool::PoolError;

/// Map pool errors into the store's connection variant.
pub(crate) fn map_pool_error<E: StoreError>(error: PoolError) -> E {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    E::connection_failed(message)
}

/// Map Diesel errors into the store's query or connection variant.
///
/// Only a closed connection counts as a connection failure. Driver messages
/// are logged at debug level and replaced by a fixed description so SQL
/// details never reach clients.
pub(crate) fn map_diesel_error<E: StoreError>(error: diesel::result::Error) -> E {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            E::connection_failed("database connection error".to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            E::query_failed("referenced row does not exist".to_owned())
        }
        DieselError::NotFound => E::query_failed("record not found".to_owned()),
        DieselError::QueryBuilderError(_) => E::query_failed("database query error".to_owned()),
        _ => E::query_failed("database error".to_owned()),
    }
}

/// Convert an affected-row count reported by Diesel.
pub(crate) fn affected_rows<E: StoreError>(count: usize) -> Result<u64, E> {
    u64::try_from(count).map_err(|_| E::query_failed(format!("row count {count} out of range")))
}

/// Convert a non-negative `COUNT(*)` result.
pub(crate) fn row_count<E: StoreError>(count: i64) -> Result<u64, E> {
    u64::try_from(count).map_err(|_| E::query_failed(format!("negative row count {count}")))
}
