//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Comment;
use blog_core::traits::{CommentRepository, RepoResult};

use crate::models::CommentModel;

use super::error::{comment_not_found, map_db_error, missing_generated_id};

/// PostgreSQL implementation of CommentRepository
///
/// Every lookup is scoped by the `(post_id, id)` pair so a comment can
/// never be addressed through the wrong post.
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: i64) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, post_id, text, created_at, updated_at
            FROM comments
            WHERE post_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, post_id: i64, comment_id: i64) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, post_id, text, created_at, updated_at
            FROM comments
            WHERE id = $1 AND post_id = $2
            "#,
        )
        .bind(comment_id)
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn exists(&self, post_id: i64, comment_id: i64) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1 AND post_id = $2)",
        )
        .bind(comment_id)
        .bind(post_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, text))]
    async fn create(&self, post_id: i64, text: &str) -> RepoResult<Comment> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            INSERT INTO comments (post_id, text)
            VALUES ($1, $2)
            RETURNING id, post_id, text, created_at, updated_at
            "#,
        )
        .bind(post_id)
        .bind(text)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result
            .map(Comment::from)
            .ok_or_else(|| missing_generated_id("comment"))
    }

    #[instrument(skip(self, text))]
    async fn update(&self, post_id: i64, comment_id: i64, text: &str) -> RepoResult<Comment> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            UPDATE comments
            SET text = $3, updated_at = NOW()
            WHERE id = $1 AND post_id = $2
            RETURNING id, post_id, text, created_at, updated_at
            "#,
        )
        .bind(comment_id)
        .bind(post_id)
        .bind(text)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result
            .map(Comment::from)
            .ok_or_else(|| comment_not_found(post_id, comment_id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, post_id: i64, comment_id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1 AND post_id = $2")
            .bind(comment_id)
            .bind(post_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(post_id, comment_id));
        }

        Ok(())
    }
}
