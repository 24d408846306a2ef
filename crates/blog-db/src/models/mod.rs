//! Database models - SQLx-compatible structs for PostgreSQL tables

mod blog;
mod comment;
mod like;
mod post;
mod session;
mod user;

pub use blog::BlogModel;
pub use comment::CommentModel;
pub use like::{LikeCountsModel, LikeDetailsModel, LikeStatusModel};
pub use post::PostModel;
pub use session::SessionModel;
pub use user::UserModel;
