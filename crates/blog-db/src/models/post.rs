//! Post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the posts table
///
/// The `image` column is intentionally absent: post rows are fetched
/// without the blob, and the image is read through a dedicated query.
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub likes_count: i32,
    pub comments_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostModel {
    /// Check if the post has received any likes
    #[inline]
    pub fn has_likes(&self) -> bool {
        self.likes_count > 0
    }

    /// Check if the post has any comments
    #[inline]
    pub fn has_comments(&self) -> bool {
        self.comments_count > 0
    }
}
