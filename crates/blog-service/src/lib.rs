//! # blog-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export the main entry points
pub use services::{
    CommentService, MaintenanceService, PostService, SearchService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
