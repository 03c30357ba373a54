//! Database models with SQLx `FromRow` derives

mod comment;
mod post;
mod tag;

pub use comment::CommentModel;
pub use post::PostModel;
pub use tag::{PostTagModel, TagModel};
