//! Tag model → entity mapper

use blog_core::entities::Tag;

use crate::models::{PostTagModel, TagModel};

/// Convert TagModel to Tag entity
impl From<TagModel> for Tag {
    fn from(model: TagModel) -> Self {
        Tag {
            id: model.id,
            name: model.name,
        }
    }
}

/// Convert a joined post-tag row to a Tag entity, dropping the post id
impl From<PostTagModel> for Tag {
    fn from(model: PostTagModel) -> Self {
        Tag {
            id: model.id,
            name: model.name,
        }
    }
}
