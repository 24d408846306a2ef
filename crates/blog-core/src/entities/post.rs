//! Post entity - an article published inside a blog

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Snowflake,
    pub blog_id: Snowflake,
    /// Denormalized from the owning blog when loaded
    pub blog_name: String,
    pub title: String,
    pub short_description: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(
        id: Snowflake,
        blog_id: Snowflake,
        blog_name: String,
        title: String,
        short_description: String,
        content: String,
    ) -> Self {
        Self {
            id,
            blog_id,
            blog_name,
            title,
            short_description,
            content,
            created_at: Utc::now(),
        }
    }
}
