//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod comment;
pub mod context;
pub mod error;
pub mod maintenance;
pub mod post;
pub mod search;

// Re-export all services for convenience
pub use comment::CommentService;
pub use context::{ContextError, ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use maintenance::MaintenanceService;
pub use post::PostService;
pub use search::SearchService;
