//! Comment entity - a comment scoped to its parent post

use chrono::{DateTime, Utc};

/// Comment entity
///
/// Always addressed by the `(post_id, id)` pair; deletion is physical, there
/// is no deleted flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Check if the comment text is blank
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
