//! Post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of `posts` joined with the owning blog's name
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub blog_id: i64,
    pub blog_name: String,
    pub title: String,
    pub short_description: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
