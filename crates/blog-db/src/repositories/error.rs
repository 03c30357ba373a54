//! Error handling utilities for repositories

use blog_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "post not found" error
pub fn post_not_found(id: i64) -> DomainError {
    DomainError::PostNotFound(id)
}

/// Create a "comment not found" error
pub fn comment_not_found(post_id: i64, comment_id: i64) -> DomainError {
    DomainError::CommentNotFound {
        comment_id,
        post_id,
    }
}

/// Error for an insert that produced no generated id
pub fn missing_generated_id(entity: &str) -> DomainError {
    DomainError::Conflict(format!("{entity} insert returned no generated id"))
}
