//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod blog;
pub mod comment;
pub mod context;
pub mod error;
pub mod like;
pub mod post;
pub mod security;
pub mod testing;
pub mod user;

#[cfg(test)]
mod testing_support;

// Re-export all services for convenience
pub use auth::{AuthService, ClientInfo};
pub use blog::BlogService;
pub use comment::CommentService;
pub use context::{CodeLifetimes, ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use like::LikeService;
pub use post::PostService;
pub use security::SecurityService;
pub use testing::TestingService;
pub use user::UserService;
