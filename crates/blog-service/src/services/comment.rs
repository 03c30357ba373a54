//! Comment service
//!
//! Handles comment listing, creation, editing, and deletion, keeping the
//! post's comment counter in step.

use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CommentRequest, CommentResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List a post's comments, newest first
    #[instrument(skip(self))]
    pub async fn get_comments(&self, post_id: i64) -> ServiceResult<Vec<CommentResponse>> {
        self.require_post(post_id).await?;

        let comments = self.ctx.comment_repo().find_by_post(post_id).await?;
        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// Get one comment, addressed by its `(post_id, id)` pair
    #[instrument(skip(self))]
    pub async fn get_comment(
        &self,
        post_id: i64,
        comment_id: i64,
    ) -> ServiceResult<CommentResponse> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(post_id, comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        Ok(CommentResponse::from(comment))
    }

    /// Add a comment to a post and bump the post's comment counter
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        post_id: i64,
        request: CommentRequest,
    ) -> ServiceResult<CommentResponse> {
        if request.id.is_some() {
            return Err(ServiceError::validation(
                "A new comment must not carry an id",
            ));
        }
        require_post_id_match(post_id, &request)?;
        request.validate()?;
        self.require_post(post_id).await?;

        let comment = self
            .ctx
            .comment_repo()
            .create(post_id, &request.text)
            .await?;
        self.ctx.post_repo().increment_comments(post_id).await?;

        info!(post_id, comment_id = comment.id, "Comment created");

        Ok(CommentResponse::from(comment))
    }

    /// Edit a comment's text
    #[instrument(skip(self, request))]
    pub async fn update_comment(
        &self,
        post_id: i64,
        comment_id: i64,
        request: CommentRequest,
    ) -> ServiceResult<CommentResponse> {
        if let Some(body_id) = request.id {
            if body_id != comment_id {
                return Err(ServiceError::validation(format!(
                    "Body id {body_id} does not match addressed comment {comment_id}"
                )));
            }
        }
        require_post_id_match(post_id, &request)?;
        request.validate()?;

        let comment = self
            .ctx
            .comment_repo()
            .update(post_id, comment_id, &request.text)
            .await?;

        info!(post_id, comment_id, "Comment updated");

        Ok(CommentResponse::from(comment))
    }

    /// Delete a comment and drop the post's comment counter
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, post_id: i64, comment_id: i64) -> ServiceResult<()> {
        self.ctx.comment_repo().delete(post_id, comment_id).await?;
        self.ctx.post_repo().decrement_comments(post_id).await?;

        info!(post_id, comment_id, "Comment deleted");

        Ok(())
    }

    /// Fail with NotFound when the post does not exist
    async fn require_post(&self, post_id: i64) -> ServiceResult<()> {
        if !self.ctx.post_repo().exists(post_id).await? {
            return Err(ServiceError::not_found("Post", post_id.to_string()));
        }
        Ok(())
    }
}

/// Reject a body post id that disagrees with the addressed post
fn require_post_id_match(post_id: i64, request: &CommentRequest) -> ServiceResult<()> {
    if let Some(body_post_id) = request.post_id {
        if body_post_id != post_id {
            return Err(ServiceError::validation(format!(
                "Body post id {body_post_id} does not match addressed post {post_id}"
            )));
        }
    }
    Ok(())
}
