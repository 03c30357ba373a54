//! Repository traits (ports) for the storage layer

mod repositories;

pub use repositories::{CommentRepository, PostRepository, RepoResult, TagRepository};
