//! # blog-core
//!
//! Domain layer containing entities, value objects and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Blog, Comment, EmailConfirmation, Like, LikeCounts, LikeDetails, LikeStatus, LikeTarget,
    PasswordRecovery, Post, Session, User,
};
pub use error::DomainError;
pub use traits::{
    BlogQuery, BlogRepository, CommentRepository, LikeRepository, Mailer, MaintenanceRepository,
    PostRepository, RepoResult, SessionRepository, UserQuery, UserRepository,
};
pub use value_objects::{
    Page, PageQuery, Snowflake, SnowflakeGenerator, SnowflakeParseError, SortDirection,
};
