//! Response DTOs
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Post Responses
// ============================================================================

/// Full post representation with the complete body text
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub tags: Vec<String>,
    pub likes_count: i32,
    pub comments_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post representation for feed listings, carrying a truncated body
#[derive(Debug, Clone, Serialize)]
pub struct PostSummaryResponse {
    pub id: i64,
    pub title: String,
    pub text_preview: String,
    pub tags: Vec<String>,
    pub likes_count: i32,
    pub comments_count: i32,
    pub created_at: DateTime<Utc>,
}

/// One page of the post feed with pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct PostsPageResponse {
    pub posts: Vec<PostSummaryResponse>,
    pub page_number: i64,
    pub page_size: i64,
    pub has_prev: bool,
    pub has_next: bool,
    pub last_page: i64,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment representation
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub post_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
