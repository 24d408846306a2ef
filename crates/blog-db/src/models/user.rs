//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub login: String,
    pub email: String,
    pub password_hash: String,
    pub confirmation_code: Uuid,
    pub confirmation_expires_at: DateTime<Utc>,
    pub is_confirmed: bool,
    pub recovery_code: Option<Uuid>,
    pub recovery_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
