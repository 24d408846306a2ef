//! Comment entity - a user's reply under a post

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub post_id: Snowflake,
    pub author_id: Snowflake,
    pub author_login: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment
    pub fn new(
        id: Snowflake,
        post_id: Snowflake,
        author_id: Snowflake,
        author_login: String,
        content: String,
    ) -> Self {
        Self {
            id,
            post_id,
            author_id,
            author_login,
            content,
            created_at: Utc::now(),
        }
    }

    /// Check if the comment was written by `user_id`
    #[inline]
    pub fn is_author(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }
}
