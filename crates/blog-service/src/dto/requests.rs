//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Post text must not be empty"))]
    pub text: String,

    /// Raw tag names; canonicalized by the service before storage
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Update post request
///
/// The optional `id` must match the addressed post when present.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePostRequest {
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Post text must not be empty"))]
    pub text: String,

    /// Raw tag names; the post's tag set is reconciled to exactly these
    #[serde(default)]
    pub tags: Vec<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create or update comment request
///
/// On create, `id` must be absent. On update, when present it must match
/// the addressed comment. `post_id`, when present, must match the
/// addressed post.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentRequest {
    pub id: Option<i64>,

    pub post_id: Option<i64>,

    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_post_request_validation() {
        let valid = CreatePostRequest {
            title: "A title".to_string(),
            text: "Some text".to_string(),
            tags: vec![],
        };
        assert!(valid.validate().is_ok());

        let empty_title = CreatePostRequest {
            title: String::new(),
            text: "Some text".to_string(),
            tags: vec![],
        };
        assert!(empty_title.validate().is_err());

        let empty_text = CreatePostRequest {
            title: "A title".to_string(),
            text: String::new(),
            tags: vec![],
        };
        assert!(empty_text.validate().is_err());
    }

    #[test]
    fn test_comment_request_validation() {
        let valid = CommentRequest {
            id: None,
            post_id: None,
            text: "Nice post".to_string(),
        };
        assert!(valid.validate().is_ok());

        let too_long = CommentRequest {
            id: None,
            post_id: None,
            text: "x".repeat(2001),
        };
        assert!(too_long.validate().is_err());
    }
}
