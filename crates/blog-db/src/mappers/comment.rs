//! Comment model → entity mapper

use blog_core::entities::Comment;

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            post_id: model.post_id,
            text: model.text,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
