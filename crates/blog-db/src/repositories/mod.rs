//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in blog-core.

mod blog;
mod comment;
mod error;
mod like;
mod maintenance;
mod post;
mod session;
mod user;

pub use blog::PgBlogRepository;
pub use comment::PgCommentRepository;
pub use like::PgLikeRepository;
pub use maintenance::PgMaintenanceRepository;
pub use post::PgPostRepository;
pub use session::PgSessionRepository;
pub use user::PgUserRepository;
