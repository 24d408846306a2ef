//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{
    Blog, Comment, Like, LikeCounts, LikeDetails, LikeStatus, LikeTarget, Post, Session, User,
};
use crate::error::DomainError;
use crate::value_objects::{Page, PageQuery, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// Filter for the admin user listing. Terms are OR-combined, case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    pub search_login_term: Option<String>,
    pub search_email_term: Option<String>,
    pub page: PageQuery,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user whose login or email equals `login_or_email`
    async fn find_by_login_or_email(&self, login_or_email: &str) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Find user holding the given confirmation code
    async fn find_by_confirmation_code(&self, code: Uuid) -> RepoResult<Option<User>>;

    /// Check if login is already taken
    async fn login_exists(&self, login: &str) -> RepoResult<bool>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Insert a new user
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// Atomically confirm the account holding `code` if it is unexpired at
    /// `now` and not confirmed yet. Returns the confirmed user's id.
    async fn confirm_email(&self, code: Uuid, now: DateTime<Utc>) -> RepoResult<Option<Snowflake>>;

    /// Replace the confirmation code of an unconfirmed account
    async fn update_confirmation_code(
        &self,
        id: Snowflake,
        code: Uuid,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<()>;

    /// Store a password recovery code
    async fn set_recovery_code(
        &self,
        id: Snowflake,
        code: Uuid,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<()>;

    /// Atomically swap the password of the user holding an unexpired
    /// recovery `code` and clear the code. Returns the affected user id.
    async fn reset_password(
        &self,
        code: Uuid,
        password_hash: &str,
        now: DateTime<Utc>,
    ) -> RepoResult<Option<Snowflake>>;

    /// Paged admin listing
    async fn find_page(&self, query: &UserQuery) -> RepoResult<Page<User>>;

    /// Delete a user; returns false when it did not exist
    async fn delete(&self, id: Snowflake) -> RepoResult<bool>;
}

// ============================================================================
// Session Repository
// ============================================================================

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a new session row
    async fn create(&self, session: &Session) -> RepoResult<()>;

    /// Live session matching (user, token key)
    async fn find_by_token_key(
        &self,
        user_id: Snowflake,
        token_key: Uuid,
    ) -> RepoResult<Option<Session>>;

    /// Session for a device regardless of owner
    async fn find_by_device(&self, device_id: Uuid) -> RepoResult<Option<Session>>;

    /// All unexpired sessions of a user, most recently active first
    async fn find_active_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Session>>;

    /// Replace the token key of the session still holding `previous_key`.
    /// Returns false if that key was already retired.
    async fn rotate(&self, previous_key: Uuid, rotated: &Session) -> RepoResult<bool>;

    /// Check whether (user, token key) still names a stored session
    async fn exists(&self, user_id: Snowflake, token_key: Uuid) -> RepoResult<bool>;

    /// Delete the session holding `token_key`
    async fn delete_by_token_key(&self, token_key: Uuid) -> RepoResult<()>;

    /// Delete one device's session; returns false when none existed
    async fn delete_by_device(&self, device_id: Uuid) -> RepoResult<bool>;

    /// Delete every session of a user; returns the number removed
    async fn delete_all_for_user(&self, user_id: Snowflake) -> RepoResult<u64>;
}

// ============================================================================
// Blog Repository
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct BlogQuery {
    pub search_name_term: Option<String>,
    pub page: PageQuery,
}

#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Blog>>;

    async fn find_page(&self, query: &BlogQuery) -> RepoResult<Page<Blog>>;

    async fn create(&self, blog: &Blog) -> RepoResult<()>;

    /// Returns false when the blog does not exist
    async fn update(&self, blog: &Blog) -> RepoResult<bool>;

    async fn delete(&self, id: Snowflake) -> RepoResult<bool>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID with its blog name filled in
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>>;

    /// Paged posts, optionally restricted to one blog
    async fn find_page(&self, blog_id: Option<Snowflake>, query: &PageQuery)
        -> RepoResult<Page<Post>>;

    async fn create(&self, post: &Post) -> RepoResult<()>;

    async fn update(&self, post: &Post) -> RepoResult<bool>;

    async fn delete(&self, id: Snowflake) -> RepoResult<bool>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID with its author login filled in
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    async fn find_by_post(&self, post_id: Snowflake, query: &PageQuery) -> RepoResult<Page<Comment>>;

    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    async fn update_content(&self, id: Snowflake, content: &str) -> RepoResult<bool>;

    async fn delete(&self, id: Snowflake) -> RepoResult<bool>;
}

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Upsert the user's reaction, or remove it when the status is `None`
    async fn set_status(&self, like: &Like) -> RepoResult<()>;

    /// The user's reactions on `targets`. Targets without one are absent.
    async fn statuses_of(
        &self,
        user_id: Snowflake,
        targets: &[LikeTarget],
    ) -> RepoResult<HashMap<LikeTarget, LikeStatus>>;

    /// Like/dislike totals per target. Targets nobody reacted to are absent.
    async fn counts(&self, targets: &[LikeTarget]) -> RepoResult<HashMap<LikeTarget, LikeCounts>>;

    /// Up to `limit` most recent "Like" reactions per target, newest first
    async fn newest_likes(
        &self,
        targets: &[LikeTarget],
        limit: i64,
    ) -> RepoResult<HashMap<LikeTarget, Vec<LikeDetails>>>;
}

// ============================================================================
// Maintenance Repository
// ============================================================================

#[async_trait]
pub trait MaintenanceRepository: Send + Sync {
    /// Remove every row from every table
    async fn clear_all(&self) -> RepoResult<()>;

    /// Cheap round trip used by readiness checks
    async fn ping(&self) -> RepoResult<()>;
}
