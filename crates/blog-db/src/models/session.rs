//! Session database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for sessions table
#[derive(Debug, Clone, FromRow)]
pub struct SessionModel {
    pub device_id: Uuid,
    pub token_key: Uuid,
    pub user_id: i64,
    pub ip: String,
    pub user_agent: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
