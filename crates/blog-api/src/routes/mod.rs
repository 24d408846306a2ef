//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use blog_common::RateLimitConfig;

use crate::handlers::{auth, blogs, comments, health, posts, security, testing, users};
use crate::middleware::auth_rate_limit;
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router(rate_limit: &RateLimitConfig) -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes(rate_limit))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes(rate_limit: &RateLimitConfig) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_rate_limit(auth_routes(), rate_limit))
        .merge(security_routes())
        .merge(user_routes())
        .merge(blog_routes())
        .merge(post_routes())
        .merge(comment_routes())
        .merge(testing_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/registration", post(auth::register))
        .route("/registration-confirmation", post(auth::confirm_registration))
        .route("/registration-email-resending", post(auth::resend_confirmation))
        .route("/login", post(auth::login))
        .route("/refresh-token", post(auth::refresh_token))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
        .route("/password-recovery", post(auth::password_recovery))
        .route("/new-password", post(auth::new_password))
}

/// Device session routes
fn security_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/security/devices",
            get(security::list_devices).delete(security::terminate_all),
        )
        .route("/security/devices/:device_id", delete(security::terminate_device))
}

/// Admin user routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/:id", delete(users::delete_user))
}

/// Blog routes
fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(blogs::list_blogs).post(blogs::create_blog))
        .route(
            "/blogs/:id",
            get(blogs::get_blog)
                .put(blogs::update_blog)
                .delete(blogs::delete_blog),
        )
        .route(
            "/blogs/:id/posts",
            get(blogs::list_blog_posts).post(blogs::create_blog_post),
        )
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route(
            "/posts/:id",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route(
            "/posts/:id/comments",
            get(posts::list_post_comments).post(posts::create_comment),
        )
        .route("/posts/:id/like-status", put(posts::set_post_like_status))
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/comments/:id",
            get(comments::get_comment)
                .put(comments::update_comment)
                .delete(comments::delete_comment),
        )
        .route("/comments/:id/like-status", put(comments::set_comment_like_status))
}

/// Test-support routes
fn testing_routes() -> Router<AppState> {
    Router::new().route("/testing/all-data", delete(testing::clear_all_data))
}
