//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use blog_core::entities::{Comment, Post};

use super::responses::{CommentResponse, PostResponse, PostSummaryResponse};

/// Body length, in characters, shown in feed listings before truncation
pub const PREVIEW_MAX_CHARS: usize = 128;

// ============================================================================
// Post Mappers
// ============================================================================

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            text: post.text.clone(),
            tags: post.tag_names(),
            likes_count: post.likes_count,
            comments_count: post.comments_count,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self::from(&post)
    }
}

impl From<&Post> for PostSummaryResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            text_preview: post.preview(PREVIEW_MAX_CHARS),
            tags: post.tag_names(),
            likes_count: post.likes_count,
            comments_count: post.comments_count,
            created_at: post.created_at,
        }
    }
}

impl From<Post> for PostSummaryResponse {
    fn from(post: Post) -> Self {
        Self::from(&post)
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            text: comment.text.clone(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_post(text: &str) -> Post {
        Post {
            id: 1,
            title: "Title".to_string(),
            text: text.to_string(),
            likes_count: 3,
            comments_count: 2,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_summary_keeps_short_text_intact() {
        let post = sample_post("short body");
        let summary = PostSummaryResponse::from(&post);
        assert_eq!(summary.text_preview, "short body");
    }

    #[test]
    fn test_summary_truncates_long_text() {
        let post = sample_post(&"x".repeat(500));
        let summary = PostSummaryResponse::from(&post);
        assert_eq!(summary.text_preview.chars().count(), PREVIEW_MAX_CHARS + 1);
        assert!(summary.text_preview.ends_with('\u{2026}'));
    }

    #[test]
    fn test_full_response_keeps_entire_text() {
        let long = "y".repeat(500);
        let post = sample_post(&long);
        let response = PostResponse::from(&post);
        assert_eq!(response.text, long);
    }
}
