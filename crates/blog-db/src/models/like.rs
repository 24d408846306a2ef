//! Like aggregation models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A stored reaction on one target
#[derive(Debug, Clone, FromRow)]
pub struct LikeStatusModel {
    pub target_type: String,
    pub target_id: i64,
    pub status: String,
}

/// Result of counting reactions on one target
#[derive(Debug, Clone, FromRow)]
pub struct LikeCountsModel {
    pub target_type: String,
    pub target_id: i64,
    pub likes: i64,
    pub dislikes: i64,
}

/// A "Like" row joined with the user's login
#[derive(Debug, Clone, FromRow)]
pub struct LikeDetailsModel {
    pub target_type: String,
    pub target_id: i64,
    pub user_id: i64,
    pub login: String,
    pub added_at: DateTime<Utc>,
}
