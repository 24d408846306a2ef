//! Ports implemented by the infrastructure crates

mod mailer;
mod repositories;

pub use mailer::Mailer;
pub use repositories::{
    BlogQuery, BlogRepository, CommentRepository, LikeRepository, MaintenanceRepository,
    PostRepository, RepoResult, SessionRepository, UserQuery, UserRepository,
};
