//! Domain entities - core business objects

mod blog;
mod comment;
mod like;
mod post;
mod session;
mod user;

pub use blog::Blog;
pub use comment::Comment;
pub use like::{Like, LikeCounts, LikeDetails, LikeStatus, LikeTarget};
pub use post::Post;
pub use session::Session;
pub use user::{EmailConfirmation, PasswordRecovery, User};
