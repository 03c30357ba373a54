//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. All queries are bounded output (paged or
//! single id), and all counter mutations are single-statement atomic
//! adjustments on the storage side.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::entities::{Comment, Post, Tag};
use crate::error::DomainError;
use crate::value_objects::SearchQuery;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Ids of posts matching the filter, ordered `created_at DESC, id DESC`,
    /// sliced by `(limit, offset)`. Tag filters use AND semantics: a post
    /// matches only if it carries every requested tag.
    async fn find_ids(&self, query: &SearchQuery, limit: i64, offset: i64)
        -> RepoResult<Vec<i64>>;

    /// Unpaged count of posts matching the same predicate as `find_ids`
    async fn count(&self, query: &SearchQuery) -> RepoResult<i64>;

    /// Batch hydration of posts by id, without tags, in the same total order
    /// as `find_ids`. Tags are merged by the caller via `TagRepository`.
    async fn find_by_ids(&self, ids: &[i64]) -> RepoResult<Vec<Post>>;

    /// Find a single post by id, without tags
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Post>>;

    /// Check whether a post with this id exists
    async fn exists(&self, id: i64) -> RepoResult<bool>;

    /// Insert a post, returning its generated id
    async fn create(&self, title: &str, text: &str) -> RepoResult<i64>;

    /// Update title and body; bumps `updated_at`. Fails with
    /// `PostNotFound` when nothing was updated.
    async fn update(&self, id: i64, title: &str, text: &str) -> RepoResult<()>;

    /// Physically delete a post. Fails with `PostNotFound` when nothing was
    /// deleted.
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Atomically increment the like counter and return the new value.
    /// A single conditional update, never read-then-write.
    async fn increment_likes(&self, id: i64) -> RepoResult<i32>;

    /// Replace the post's image blob
    async fn set_image(&self, id: i64, image: &[u8]) -> RepoResult<()>;

    /// Fetch the post's image. `PostNotFound` when the post does not exist,
    /// `ImageNotSet` when the post exists but carries no image.
    async fn get_image(&self, id: i64) -> RepoResult<Vec<u8>>;

    /// Atomically bump the comment counter. Invoked only by the comment
    /// create flow, never by external callers.
    async fn increment_comments(&self, id: i64) -> RepoResult<()>;

    /// Atomically drop the comment counter. Invoked only by the comment
    /// delete flow.
    async fn decrement_comments(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Tag Repository
// ============================================================================

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Idempotently insert any missing (canonical) tag names and return the
    /// rows for all requested names. Concurrent first-inserts of the same
    /// name are resolved by the unique constraint plus insert-or-ignore.
    async fn ensure_tags(&self, names: &[String]) -> RepoResult<Vec<Tag>>;

    /// Batch tag hydration, one round trip regardless of input size. Posts
    /// with no tags are absent from the map.
    async fn find_by_post_ids(&self, post_ids: &[i64]) -> RepoResult<HashMap<i64, Vec<Tag>>>;

    /// Reconcile one post's association set to exactly the desired
    /// (canonical, deduplicated) names: ensure the tags exist, insert missing
    /// associations, delete stale ones. An empty set removes all
    /// associations. Atomic with respect to the targeted post.
    async fn replace_post_tags(&self, post_id: i64, names: &[String]) -> RepoResult<()>;

    /// Remove every association for a post (tags themselves are left for the
    /// orphan sweep)
    async fn remove_post_tags(&self, post_id: i64) -> RepoResult<()>;

    /// Delete every tag with zero associations, returning how many were
    /// removed. A maintenance sweep, not a request-path operation.
    async fn purge_orphans(&self) -> RepoResult<u64>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Comments of a post, ordered `created_at DESC, id DESC`
    async fn find_by_post(&self, post_id: i64) -> RepoResult<Vec<Comment>>;

    /// Find one comment by its `(post_id, id)` pair
    async fn find_by_id(&self, post_id: i64, comment_id: i64) -> RepoResult<Option<Comment>>;

    /// Check whether the `(post_id, id)` pair exists
    async fn exists(&self, post_id: i64, comment_id: i64) -> RepoResult<bool>;

    /// Insert a comment and return it
    async fn create(&self, post_id: i64, text: &str) -> RepoResult<Comment>;

    /// Update a comment's text; bumps `updated_at`. Fails with
    /// `CommentNotFound` when the pair does not exist.
    async fn update(&self, post_id: i64, comment_id: i64, text: &str) -> RepoResult<Comment>;

    /// Physically delete a comment. Fails with `CommentNotFound` when
    /// nothing was deleted.
    async fn delete(&self, post_id: i64, comment_id: i64) -> RepoResult<()>;
}
