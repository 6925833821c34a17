//! Error handling utilities for the Postgres stores

use modlog_core::LogError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to LogError
pub fn map_db_error(e: SqlxError) -> LogError {
    LogError::Database(e.to_string())
}
