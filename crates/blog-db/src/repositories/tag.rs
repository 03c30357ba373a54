//! PostgreSQL implementation of TagRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Tag;
use blog_core::traits::{RepoResult, TagRepository};

use crate::models::{PostTagModel, TagModel};

use super::error::map_db_error;

/// PostgreSQL implementation of TagRepository
#[derive(Clone)]
pub struct PgTagRepository {
    pool: PgPool,
}

impl PgTagRepository {
    /// Create a new PgTagRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    #[instrument(skip(self))]
    async fn ensure_tags(&self, names: &[String]) -> RepoResult<Vec<Tag>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        // Insert-or-ignore resolves concurrent first-inserts of the same
        // name through the unique constraint.
        sqlx::query(
            r#"
            INSERT INTO tags (name)
            SELECT unnest($1::text[])
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(names)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        let results = sqlx::query_as::<_, TagModel>(
            r#"
            SELECT id, name
            FROM tags
            WHERE name = ANY($1)
            ORDER BY name
            "#,
        )
        .bind(names)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tag::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_post_ids(&self, post_ids: &[i64]) -> RepoResult<HashMap<i64, Vec<Tag>>> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, PostTagModel>(
            r#"
            SELECT pt.post_id, t.id, t.name
            FROM post_tags pt
            JOIN tags t ON t.id = pt.tag_id
            WHERE pt.post_id = ANY($1)
            ORDER BY t.name
            "#,
        )
        .bind(post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut by_post: HashMap<i64, Vec<Tag>> = HashMap::new();
        for row in rows {
            by_post.entry(row.post_id).or_default().push(Tag::from(row));
        }

        Ok(by_post)
    }

    #[instrument(skip(self))]
    async fn replace_post_tags(&self, post_id: i64, names: &[String]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if names.is_empty() {
            sqlx::query("DELETE FROM post_tags WHERE post_id = $1")
                .bind(post_id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        } else {
            sqlx::query(
                r#"
                INSERT INTO tags (name)
                SELECT unnest($1::text[])
                ON CONFLICT (name) DO NOTHING
                "#,
            )
            .bind(names)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            // Drop stale associations first, then add the missing ones.
            sqlx::query(
                r#"
                DELETE FROM post_tags
                WHERE post_id = $1
                  AND tag_id NOT IN (SELECT id FROM tags WHERE name = ANY($2))
                "#,
            )
            .bind(post_id)
            .bind(names)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            sqlx::query(
                r#"
                INSERT INTO post_tags (post_id, tag_id)
                SELECT $1, id FROM tags WHERE name = ANY($2)
                ON CONFLICT (post_id, tag_id) DO NOTHING
                "#,
            )
            .bind(post_id)
            .bind(names)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_post_tags(&self, post_id: i64) -> RepoResult<()> {
        sqlx::query("DELETE FROM post_tags WHERE post_id = $1")
            .bind(post_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn purge_orphans(&self) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM tags t
            WHERE NOT EXISTS (
                SELECT 1 FROM post_tags pt WHERE pt.tag_id = t.id
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
