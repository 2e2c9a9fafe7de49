//! Error handling utilities for repositories

use campaign_core::error::DomainError;
use sqlx::Error as SqlxError;

/// SQLSTATE codes Postgres uses for write-write races
const SERIALIZATION_FAILURE: &str = "40001";
const DEADLOCK_DETECTED: &str = "40P01";

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map errors from reaction writes, turning races into `ReactionConflict`
///
/// The caller retries the whole unit of work on a conflict.
pub fn map_write_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return DomainError::ReactionConflict;
        }
        if matches!(
            db_err.code().as_deref(),
            Some(SERIALIZATION_FAILURE | DEADLOCK_DETECTED)
        ) {
            return DomainError::ReactionConflict;
        }
    }
    map_db_error(e)
}
