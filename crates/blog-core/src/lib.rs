//! # blog-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! domain error taxonomy. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Comment, Post, Tag};
pub use error::DomainError;
pub use traits::{CommentRepository, PostRepository, RepoResult, TagRepository};
pub use value_objects::{normalize_tag, PageInfo, PageRequest, SearchQuery};
