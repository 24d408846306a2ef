//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output in camelCase.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use blog_core::entities::LikeStatus;
use blog_core::Page;
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Offset-paginated listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub pages_count: i64,
    pub page: u32,
    pub page_size: u32,
    pub total_count: i64,
    pub items: Vec<T>,
}

impl<T> PageResponse<T> {
    /// Convert a repository page, mapping each item
    pub fn from_page<U>(page: Page<U>, f: impl FnMut(U) -> T) -> Self {
        let pages_count = page.pages_count();
        Self {
            pages_count,
            page: page.page,
            page_size: page.page_size,
            total_count: page.total_count,
            items: page.items.into_iter().map(f).collect(),
        }
    }

    /// Keep the paging metadata of `page` with already converted items
    pub fn with_items<U>(page: &Page<U>, items: Vec<T>) -> Self {
        Self {
            pages_count: page.pages_count(),
            page: page.page,
            page_size: page.page_size,
            total_count: page.total_count,
            items,
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub access_token: String,
}

/// Tokens produced by login or refresh; the refresh token travels as a cookie
#[derive(Debug, Clone)]
pub struct IssuedTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Refresh token lifetime in seconds
    pub refresh_expires_in: i64,
}

impl IssuedTokens {
    pub fn body(&self) -> AccessTokenResponse {
        AccessTokenResponse {
            access_token: self.access_token.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub email: String,
    pub login: String,
    pub user_id: String,
}

// ============================================================================
// User / Device Responses
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub login: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceResponse {
    pub ip: String,
    pub title: String,
    pub last_active_date: DateTime<Utc>,
    pub device_id: String,
}

// ============================================================================
// Content Responses
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub website_url: String,
    pub created_at: DateTime<Utc>,
    pub is_membership: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewestLikeResponse {
    pub added_at: DateTime<Utc>,
    pub user_id: String,
    pub login: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikesInfoResponse {
    pub likes_count: i64,
    pub dislikes_count: i64,
    pub my_status: LikeStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedLikesInfoResponse {
    pub likes_count: i64,
    pub dislikes_count: i64,
    pub my_status: LikeStatus,
    pub newest_likes: Vec<NewestLikeResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub content: String,
    pub blog_id: String,
    pub blog_name: String,
    pub created_at: DateTime<Utc>,
    pub extended_likes_info: ExtendedLikesInfoResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentatorInfoResponse {
    pub user_id: String,
    pub user_login: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub content: String,
    pub commentator_info: CommentatorInfoResponse,
    pub created_at: DateTime<Utc>,
    pub likes_info: LikesInfoResponse,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
