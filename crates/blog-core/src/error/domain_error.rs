//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Blog not found: {0}")]
    BlogNotFound(Snowflake),

    #[error("Post not found: {0}")]
    PostNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Login already exists")]
    LoginAlreadyExists,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Confirmation code is invalid, expired or already used")]
    InvalidConfirmationCode,

    #[error("Email is unknown or already confirmed")]
    EmailNotResendable,

    #[error("Recovery code is invalid or expired")]
    InvalidRecoveryCode,

    #[error("Invalid like status: {0}")]
    InvalidLikeStatus(String),

    #[error("Blog does not exist: {0}")]
    UnknownBlogReference(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not comment author")]
    NotCommentAuthor,

    #[error("Device belongs to another user")]
    NotDeviceOwner,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Mail delivery error: {0}")]
    MailError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::BlogNotFound(_) => "UNKNOWN_BLOG",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::DeviceNotFound(_) => "UNKNOWN_DEVICE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::LoginAlreadyExists
            | Self::EmailAlreadyExists
            | Self::InvalidConfirmationCode
            | Self::EmailNotResendable
            | Self::InvalidRecoveryCode
            | Self::InvalidLikeStatus(_)
            | Self::UnknownBlogReference(_) => "FIELD_VALIDATION",

            // Authorization
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",
            Self::NotDeviceOwner => "NOT_DEVICE_OWNER",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::MailError(_) => "MAIL_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Name of the request field a validation error is about
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::LoginAlreadyExists => Some("login"),
            Self::EmailAlreadyExists | Self::EmailNotResendable => Some("email"),
            Self::InvalidConfirmationCode => Some("code"),
            Self::InvalidRecoveryCode => Some("recoveryCode"),
            Self::InvalidLikeStatus(_) => Some("likeStatus"),
            Self::UnknownBlogReference(_) => Some("blogId"),
            _ => None,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::BlogNotFound(_)
                | Self::PostNotFound(_)
                | Self::CommentNotFound(_)
                | Self::DeviceNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_)) || self.field().is_some()
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotCommentAuthor | Self::NotDeviceOwner)
    }

    /// Check if this is a conflict error
    ///
    /// Duplicate login/email are reported as field validation, so nothing
    /// in this domain surfaces as 409 today.
    pub fn is_conflict(&self) -> bool {
        false
    }
}
