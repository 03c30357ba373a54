//! Data transfer objects for service inputs and outputs
//!
//! This module provides:
//! - Request DTOs with validation for inputs
//! - Response DTOs for serializing outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{CommentRequest, CreatePostRequest, UpdatePostRequest};

// Re-export commonly used response types
pub use responses::{CommentResponse, PostResponse, PostSummaryResponse, PostsPageResponse};

// Re-export mapper constants
pub use mappers::PREVIEW_MAX_CHARS;
