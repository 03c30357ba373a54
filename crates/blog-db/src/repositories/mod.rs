//! PostgreSQL repository implementations

mod comment;
pub mod error;
mod post;
mod tag;

pub use comment::PgCommentRepository;
pub use post::PgPostRepository;
pub use tag::PgTagRepository;
