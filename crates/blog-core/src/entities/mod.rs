//! Domain entities - core business objects

mod comment;
mod post;
mod tag;

pub use comment::Comment;
pub use post::Post;
pub use tag::Tag;
