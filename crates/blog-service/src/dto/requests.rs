//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Field names follow the camelCase wire format.

use std::sync::LazyLock;

use blog_core::entities::LikeStatus;
use regex::Regex;
use serde::Deserialize;
use validator::{Validate, ValidationError};

static LOGIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]*$").expect("valid login regex"));

static WEBSITE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://([a-zA-Z0-9_-]+\.)+[a-zA-Z0-9_-]+(/[a-zA-Z0-9_-]+)*/?$")
        .expect("valid website url regex")
});

/// Length check applied after trimming surrounding whitespace
fn trimmed_length(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if len < min || len > max {
        let mut err = ValidationError::new("length");
        err.message = Some(format!("Must be {min}-{max} characters").into());
        return Err(err);
    }
    Ok(())
}

fn blog_name(value: &str) -> Result<(), ValidationError> {
    trimmed_length(value, 1, 15)
}

fn post_title(value: &str) -> Result<(), ValidationError> {
    trimmed_length(value, 1, 30)
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    trimmed_length(value, 1, usize::MAX)
}

fn like_status(value: &str) -> Result<(), ValidationError> {
    value.parse::<LikeStatus>().map(|_| ()).map_err(|_| {
        let mut err = ValidationError::new("likeStatus");
        err.message = Some("Must be one of None, Like, Dislike".into());
        err
    })
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Self-registration and admin user creation share these rules
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        length(min = 3, max = 10, message = "Login must be 3-10 characters"),
        regex(path = *LOGIN_RE, message = "Login may contain letters, digits, '_' and '-'")
    )]
    pub login: String,

    #[validate(length(min = 6, max = 20, message = "Password must be 6-20 characters"))]
    pub password: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(custom(function = "not_blank"))]
    pub login_or_email: String,

    #[validate(custom(function = "not_blank"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ConfirmationCodeRequest {
    #[validate(custom(function = "not_blank"))]
    pub code: String,
}

/// Used for both confirmation resending and password recovery
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EmailRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPasswordRequest {
    #[validate(length(min = 6, max = 20, message = "Password must be 6-20 characters"))]
    pub new_password: String,

    #[validate(custom(function = "not_blank"))]
    pub recovery_code: String,
}

// ============================================================================
// Blog Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BlogInputRequest {
    #[validate(custom(function = "blog_name"))]
    pub name: String,

    #[validate(length(min = 1, max = 500, message = "Description must be 1-500 characters"))]
    pub description: String,

    #[validate(
        length(max = 100, message = "Website URL must be at most 100 characters"),
        regex(path = *WEBSITE_URL_RE, message = "Website URL must be an https URL")
    )]
    pub website_url: String,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Post body when the blog comes from the route
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostInputRequest {
    #[validate(custom(function = "post_title"))]
    pub title: String,

    #[validate(length(min = 1, max = 100, message = "Short description must be 1-100 characters"))]
    pub short_description: String,

    #[validate(length(min = 1, max = 1000, message = "Content must be 1-1000 characters"))]
    pub content: String,
}

/// Post body naming its blog explicitly
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostInputRequest {
    #[validate(custom(function = "post_title"))]
    pub title: String,

    #[validate(length(min = 1, max = 100, message = "Short description must be 1-100 characters"))]
    pub short_description: String,

    #[validate(length(min = 1, max = 1000, message = "Content must be 1-1000 characters"))]
    pub content: String,

    #[validate(custom(function = "not_blank"))]
    pub blog_id: String,
}

impl PostInputRequest {
    /// Split off the blog reference
    pub fn into_parts(self) -> (String, BlogPostInputRequest) {
        (
            self.blog_id,
            BlogPostInputRequest {
                title: self.title,
                short_description: self.short_description,
                content: self.content,
            },
        )
    }
}

// ============================================================================
// Comment / Like Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentInputRequest {
    #[validate(length(min = 20, max = 300, message = "Content must be 20-300 characters"))]
    pub content: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatusRequest {
    #[validate(custom(function = "like_status"))]
    pub like_status: String,
}

impl LikeStatusRequest {
    /// The validated status; unknown values fall back to `None`
    pub fn status(&self) -> LikeStatus {
        self.like_status.parse().unwrap_or_default()
    }
}
