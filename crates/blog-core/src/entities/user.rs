//! User entity - account identity plus the email confirmation state

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::value_objects::Snowflake;

/// Email ownership proof attached to every account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfirmation {
    pub code: Uuid,
    pub expires_at: DateTime<Utc>,
    pub is_confirmed: bool,
}

impl EmailConfirmation {
    /// Issue a fresh, unconfirmed code valid for `ttl`
    pub fn issue(ttl: Duration) -> Self {
        Self {
            code: Uuid::new_v4(),
            expires_at: Utc::now() + ttl,
            is_confirmed: false,
        }
    }

    /// A confirmation that needs no code (admin-created accounts)
    pub fn confirmed() -> Self {
        Self {
            code: Uuid::new_v4(),
            expires_at: Utc::now(),
            is_confirmed: true,
        }
    }

    /// Whether `code` would be accepted at `now`
    pub fn accepts(&self, code: Uuid, now: DateTime<Utc>) -> bool {
        !self.is_confirmed && self.code == code && self.expires_at > now
    }
}

/// Pending password recovery request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRecovery {
    pub code: Uuid,
    pub expires_at: DateTime<Utc>,
}

impl PasswordRecovery {
    pub fn issue(ttl: Duration) -> Self {
        Self {
            code: Uuid::new_v4(),
            expires_at: Utc::now() + ttl,
        }
    }

    #[inline]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Registered account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub login: String,
    pub email: String,
    pub password_hash: String,
    pub email_confirmation: EmailConfirmation,
    pub password_recovery: Option<PasswordRecovery>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create an unconfirmed user whose confirmation code lives for `code_ttl`
    pub fn new(
        id: Snowflake,
        login: String,
        email: String,
        password_hash: String,
        code_ttl: Duration,
    ) -> Self {
        Self {
            id,
            login,
            email,
            password_hash,
            email_confirmation: EmailConfirmation::issue(code_ttl),
            password_recovery: None,
            created_at: Utc::now(),
        }
    }

    /// Create a user that skips email confirmation
    pub fn new_confirmed(id: Snowflake, login: String, email: String, password_hash: String) -> Self {
        Self {
            email_confirmation: EmailConfirmation::confirmed(),
            ..Self::new(id, login, email, password_hash, Duration::zero())
        }
    }

    #[inline]
    pub fn is_confirmed(&self) -> bool {
        self.email_confirmation.is_confirmed
    }

    /// Replace the confirmation code; the previous one stops working
    pub fn regenerate_confirmation_code(&mut self, ttl: Duration) {
        self.email_confirmation = EmailConfirmation::issue(ttl);
    }

    /// Mark the email as confirmed when `code` is acceptable
    ///
    /// Returns false and leaves the user untouched otherwise.
    pub fn confirm(&mut self, code: Uuid, now: DateTime<Utc>) -> bool {
        if !self.email_confirmation.accepts(code, now) {
            return false;
        }
        self.email_confirmation.is_confirmed = true;
        true
    }
}
