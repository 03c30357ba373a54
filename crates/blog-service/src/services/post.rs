//! Post service
//!
//! Handles post creation, editing, deletion, likes, and image attachments.

use std::collections::BTreeSet;

use tracing::{info, instrument};
use validator::Validate;

use blog_core::entities::Post;
use blog_core::value_objects::normalize_tag;

use crate::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a single post by id, with its tags
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: i64) -> ServiceResult<PostResponse> {
        let post = self.find_hydrated(post_id).await?;
        Ok(PostResponse::from(post))
    }

    /// Create a new post and attach its (canonicalized) tags
    #[instrument(skip(self, request))]
    pub async fn create_post(&self, request: CreatePostRequest) -> ServiceResult<PostResponse> {
        request.validate()?;
        let tags = canonical_tags(&request.tags)?;

        let post_id = self
            .ctx
            .post_repo()
            .create(&request.title, &request.text)
            .await?;

        // A fresh post has no associations to reconcile
        if !tags.is_empty() {
            self.ctx
                .tag_repo()
                .replace_post_tags(post_id, &tags)
                .await?;
        }

        info!(post_id, "Post created");

        let post = self.find_hydrated(post_id).await?;
        Ok(PostResponse::from(post))
    }

    /// Update a post's title, text, and tag set
    #[instrument(skip(self, request))]
    pub async fn update_post(
        &self,
        post_id: i64,
        request: UpdatePostRequest,
    ) -> ServiceResult<PostResponse> {
        if let Some(body_id) = request.id {
            if body_id != post_id {
                return Err(ServiceError::validation(format!(
                    "Body id {body_id} does not match addressed post {post_id}"
                )));
            }
        }
        request.validate()?;
        let tags = canonical_tags(&request.tags)?;

        self.ctx
            .post_repo()
            .update(post_id, &request.title, &request.text)
            .await?;

        self.ctx
            .tag_repo()
            .replace_post_tags(post_id, &tags)
            .await?;

        info!(post_id, "Post updated");

        let post = self.find_hydrated(post_id).await?;
        Ok(PostResponse::from(post))
    }

    /// Delete a post and its tag associations
    ///
    /// Tag rows themselves survive; the orphan sweep reclaims them later.
    #[instrument(skip(self))]
    pub async fn delete_post(&self, post_id: i64) -> ServiceResult<()> {
        self.ctx.tag_repo().remove_post_tags(post_id).await?;
        self.ctx.post_repo().delete(post_id).await?;

        info!(post_id, "Post deleted");

        Ok(())
    }

    /// Register one like and return the new like count
    #[instrument(skip(self))]
    pub async fn like_post(&self, post_id: i64) -> ServiceResult<i32> {
        let likes = self.ctx.post_repo().increment_likes(post_id).await?;
        Ok(likes)
    }

    /// Attach or replace the post's image
    #[instrument(skip(self, image))]
    pub async fn set_image(&self, post_id: i64, image: &[u8]) -> ServiceResult<()> {
        if image.is_empty() {
            return Err(ServiceError::validation("Image payload must not be empty"));
        }

        self.ctx.post_repo().set_image(post_id, image).await?;

        info!(post_id, bytes = image.len(), "Post image replaced");

        Ok(())
    }

    /// Fetch the post's image bytes
    #[instrument(skip(self))]
    pub async fn get_image(&self, post_id: i64) -> ServiceResult<Vec<u8>> {
        let image = self.ctx.post_repo().get_image(post_id).await?;
        Ok(image)
    }

    /// Load a post and merge in its tags
    async fn find_hydrated(&self, post_id: i64) -> ServiceResult<Post> {
        let mut post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        let mut tags = self.ctx.tag_repo().find_by_post_ids(&[post_id]).await?;
        if let Some(post_tags) = tags.remove(&post_id) {
            post.tags = post_tags;
        }

        Ok(post)
    }
}

/// Canonicalize and deduplicate raw tag names, preserving set order
fn canonical_tags(raw: &[String]) -> ServiceResult<Vec<String>> {
    let mut canonical = BTreeSet::new();
    for name in raw {
        canonical.insert(normalize_tag(name)?);
    }
    Ok(canonical.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_tags_dedupes_case_variants() {
        let raw = vec![
            "Java".to_string(),
            " java ".to_string(),
            "JAVA".to_string(),
            "rust".to_string(),
        ];
        let tags = canonical_tags(&raw).unwrap();
        assert_eq!(tags, vec!["java".to_string(), "rust".to_string()]);
    }

    #[test]
    fn test_canonical_tags_rejects_blank() {
        let raw = vec!["ok".to_string(), "   ".to_string()];
        assert!(canonical_tags(&raw).is_err());
    }

    #[test]
    fn test_canonical_tags_empty_input() {
        assert!(canonical_tags(&[]).unwrap().is_empty());
    }
}
