//! # blog-db
//!
//! Database layer implementing the blog-core repository traits with PostgreSQL via SQLx.
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ```rust,ignore
//! use blog_core::traits::UserRepository;
//! use blog_db::{create_pool, run_migrations, PgUserRepository, PoolConfig};
//!
//! let pool = create_pool(&PoolConfig::new(url, 10, 1)).await?;
//! run_migrations(&pool).await?;
//! let users = PgUserRepository::new(pool);
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{
    PgBlogRepository, PgCommentRepository, PgLikeRepository, PgMaintenanceRepository,
    PgPostRepository, PgSessionRepository, PgUserRepository,
};
