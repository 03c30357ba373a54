//! Domain errors - error types for the domain layer
//!
//! Every failure carries the offending identifier in its message so callers
//! can diagnose without inspecting internal state.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Post with id = {0} was not found.")]
    PostNotFound(i64),

    #[error("Comment with id = {comment_id} for post with id = {post_id} was not found.")]
    CommentNotFound { comment_id: i64, post_id: i64 },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Tag name cannot be blank: {0:?}")]
    InvalidTag(String),

    #[error("{0}")]
    BadRequest(String),

    // =========================================================================
    // Data State Errors
    // =========================================================================
    /// Post exists but no image has been set for it. Distinct from
    /// `PostNotFound`: "no data" rather than "no row".
    #[error("Image for post with id = {0} is not available.")]
    ImageNotSet(i64),

    #[error("{0}")]
    Conflict(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound { .. } => "UNKNOWN_COMMENT",
            Self::InvalidTag(_) => "INVALID_TAG",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::ImageNotSet(_) => "IMAGE_NOT_SET",
            Self::Conflict(_) => "CONFLICT",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PostNotFound(_) | Self::CommentNotFound { .. } | Self::ImageNotSet(_)
        )
    }

    /// Check if this is a caller-input error
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::InvalidTag(_) | Self::BadRequest(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DomainError::PostNotFound(7).code(), "UNKNOWN_POST");
        assert_eq!(
            DomainError::CommentNotFound {
                comment_id: 1,
                post_id: 2
            }
            .code(),
            "UNKNOWN_COMMENT"
        );
        assert_eq!(DomainError::ImageNotSet(7).code(), "IMAGE_NOT_SET");
    }

    #[test]
    fn test_message_mentions_identifier() {
        let err = DomainError::PostNotFound(42);
        assert!(err.to_string().contains("42"));

        let err = DomainError::CommentNotFound {
            comment_id: 5,
            post_id: 9,
        };
        let msg = err.to_string();
        assert!(msg.contains('5') && msg.contains('9'));
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::PostNotFound(1).is_not_found());
        assert!(DomainError::ImageNotSet(1).is_not_found());
        assert!(!DomainError::Conflict("dup".to_string()).is_not_found());
    }

    #[test]
    fn test_is_bad_request() {
        assert!(DomainError::InvalidTag(" ".to_string()).is_bad_request());
        assert!(DomainError::BadRequest("page".to_string()).is_bad_request());
        assert!(!DomainError::PostNotFound(1).is_bad_request());
    }
}
