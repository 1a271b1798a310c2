//! Error handling utilities for repositories

use blog_core::error::DomainError;
use blog_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "blog not found" error
pub fn blog_not_found(id: Snowflake) -> DomainError {
    DomainError::BlogNotFound(id)
}

/// Create an "entry not found" error
pub fn entry_not_found(id: Snowflake) -> DomainError {
    DomainError::EntryNotFound(id)
}
