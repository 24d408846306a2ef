//! Blog entity

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: Snowflake,
    pub name: String,
    pub description: String,
    pub website_url: String,
    pub is_membership: bool,
    pub created_at: DateTime<Utc>,
}

impl Blog {
    /// Create a new Blog
    pub fn new(id: Snowflake, name: String, description: String, website_url: String) -> Self {
        Self {
            id,
            name,
            description,
            website_url,
            is_membership: false,
            created_at: Utc::now(),
        }
    }

    /// Overwrite the editable fields
    pub fn apply_update(&mut self, name: String, description: String, website_url: String) {
        self.name = name;
        self.description = description;
        self.website_url = website_url;
    }
}
