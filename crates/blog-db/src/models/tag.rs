//! Tag database models

use sqlx::FromRow;

/// Database model for the tags table
#[derive(Debug, Clone, FromRow)]
pub struct TagModel {
    pub id: i64,
    pub name: String,
}

/// Database model for a tag row joined with its post association
///
/// Used when hydrating tags for a batch of posts in one query.
#[derive(Debug, Clone, FromRow)]
pub struct PostTagModel {
    pub post_id: i64,
    pub id: i64,
    pub name: String,
}
