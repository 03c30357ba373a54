//! Post model → entity mapper

use blog_core::entities::Post;

use crate::models::PostModel;

/// Convert PostModel to Post entity
///
/// Tags are hydrated separately and start out empty.
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            title: model.title,
            text: model.text,
            likes_count: model.likes_count,
            comments_count: model.comments_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
            tags: Vec::new(),
        }
    }
}
