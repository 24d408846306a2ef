//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of `comments` joined with the author's login
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub user_login: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
