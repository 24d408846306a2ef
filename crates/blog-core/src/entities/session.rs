//! Session entity - server-side record behind a refresh token family

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::value_objects::Snowflake;

/// One logged-in device.
///
/// `device_id` stays stable for the lifetime of the session, while
/// `token_key` is the value embedded in the current refresh token and is
/// replaced on every refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub device_id: Uuid,
    pub token_key: Uuid,
    pub user_id: Snowflake,
    pub ip: String,
    pub user_agent: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Open a new session with random device and token keys
    pub fn new(user_id: Snowflake, ip: String, user_agent: String, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            device_id: Uuid::new_v4(),
            token_key: Uuid::new_v4(),
            user_id,
            ip,
            user_agent,
            issued_at: now,
            expires_at: now + ttl,
        }
    }

    #[inline]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    #[inline]
    pub fn belongs_to(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }

    /// Produce the rotated copy of this session.
    /// The old `token_key` must be retired by the caller.
    pub fn rotated(&self, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            token_key: Uuid::new_v4(),
            issued_at: now,
            expires_at: now + ttl,
            ..self.clone()
        }
    }
}
