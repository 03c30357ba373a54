//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Post;
use blog_core::error::DomainError;
use blog_core::traits::{PostRepository, RepoResult};
use blog_core::value_objects::SearchQuery;

use crate::models::PostModel;

use super::error::{map_db_error, missing_generated_id, post_not_found};

/// PostgreSQL implementation of PostRepository
///
/// Post rows are always fetched without the image blob; the image travels
/// through `set_image` / `get_image` only.
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_ids(
        &self,
        query: &SearchQuery,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<i64>> {
        let tags = query.tag_vec();

        let ids = if tags.is_empty() {
            sqlx::query_scalar::<_, i64>(
                r#"
                SELECT id
                FROM posts
                WHERE ($1 = '' OR LOWER(title) LIKE '%' || $1 || '%')
                ORDER BY created_at DESC, id DESC
                LIMIT $2 OFFSET $3
                "#,
            )
            .bind(&query.title)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
        } else {
            // A post matches only when it carries every requested tag:
            // the HAVING count equals the number of distinct requested names.
            sqlx::query_scalar::<_, i64>(
                r#"
                SELECT id
                FROM posts
                WHERE ($1 = '' OR LOWER(title) LIKE '%' || $1 || '%')
                  AND id IN (
                      SELECT pt.post_id
                      FROM post_tags pt
                      JOIN tags t ON t.id = pt.tag_id
                      WHERE t.name = ANY($2)
                      GROUP BY pt.post_id
                      HAVING COUNT(t.name) = $3
                  )
                ORDER BY created_at DESC, id DESC
                LIMIT $4 OFFSET $5
                "#,
            )
            .bind(&query.title)
            .bind(&tags)
            .bind(tags.len() as i64)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
        }
        .map_err(map_db_error)?;

        Ok(ids)
    }

    #[instrument(skip(self))]
    async fn count(&self, query: &SearchQuery) -> RepoResult<i64> {
        let tags = query.tag_vec();

        let total = if tags.is_empty() {
            sqlx::query_scalar::<_, i64>(
                r#"
                SELECT COUNT(*)
                FROM posts
                WHERE ($1 = '' OR LOWER(title) LIKE '%' || $1 || '%')
                "#,
            )
            .bind(&query.title)
            .fetch_one(&self.pool)
            .await
        } else {
            sqlx::query_scalar::<_, i64>(
                r#"
                SELECT COUNT(*)
                FROM posts
                WHERE ($1 = '' OR LOWER(title) LIKE '%' || $1 || '%')
                  AND id IN (
                      SELECT pt.post_id
                      FROM post_tags pt
                      JOIN tags t ON t.id = pt.tag_id
                      WHERE t.name = ANY($2)
                      GROUP BY pt.post_id
                      HAVING COUNT(t.name) = $3
                  )
                "#,
            )
            .bind(&query.title)
            .bind(&tags)
            .bind(tags.len() as i64)
            .fetch_one(&self.pool)
            .await
        }
        .map_err(map_db_error)?;

        Ok(total)
    }

    #[instrument(skip(self))]
    async fn find_by_ids(&self, ids: &[i64]) -> RepoResult<Vec<Post>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, title, text, likes_count, comments_count, created_at, updated_at
            FROM posts
            WHERE id = ANY($1)
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, title, text, likes_count, comments_count, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: i64) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, text))]
    async fn create(&self, title: &str, text: &str) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO posts (title, text)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(title)
        .bind(text)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        id.ok_or_else(|| missing_generated_id("post"))
    }

    #[instrument(skip(self, text))]
    async fn update(&self, id: i64, title: &str, text: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = $2, text = $3, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(text)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_likes(&self, id: i64) -> RepoResult<i32> {
        let likes = sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE posts
            SET likes_count = likes_count + 1, updated_at = NOW()
            WHERE id = $1
            RETURNING likes_count
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        likes.ok_or_else(|| post_not_found(id))
    }

    #[instrument(skip(self, image))]
    async fn set_image(&self, id: i64, image: &[u8]) -> RepoResult<()> {
        let result = sqlx::query("UPDATE posts SET image = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(image)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_image(&self, id: i64) -> RepoResult<Vec<u8>> {
        // Outer Option: no such post. Inner Option: post exists, image NULL.
        let row = sqlx::query_scalar::<_, Option<Vec<u8>>>(
            "SELECT image FROM posts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match row {
            None => Err(post_not_found(id)),
            Some(None) => Err(DomainError::ImageNotSet(id)),
            Some(Some(image)) => Ok(image),
        }
    }

    #[instrument(skip(self))]
    async fn increment_comments(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE posts SET comments_count = comments_count + 1, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn decrement_comments(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE posts SET comments_count = comments_count - 1, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        Ok(())
    }
}
