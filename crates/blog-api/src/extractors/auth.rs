//! Authentication extractors
//!
//! Bearer access tokens, the refresh-token cookie and admin basic auth.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    extract::cookie::CookieJar,
    headers::{
        authorization::{Basic, Bearer},
        Authorization,
    },
    TypedHeader,
};
use blog_common::SessionBinding;
use blog_core::Snowflake;

use crate::response::ApiError;
use crate::state::AppState;

/// Name of the cookie carrying the refresh token
pub const REFRESH_COOKIE: &str = "refreshToken";

/// Authenticated user extracted from JWT token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID from the JWT token
    pub user_id: Snowflake,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: Snowflake) -> Self {
        Self { user_id }
    }
}

fn user_from_bearer(state: &AppState, token: &str) -> Result<AuthUser, ApiError> {
    let claims = state.jwt_service().validate_access_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Invalid access token");
        ApiError::InvalidAuthFormat
    })?;

    let user_id = claims.user_id().map_err(|e| {
        tracing::warn!(error = %e, "Invalid user ID in token");
        ApiError::InvalidAuthFormat
    })?;

    Ok(AuthUser::new(user_id))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        user_from_bearer(&AppState::from_ref(state), bearer.token())
    }
}

/// Optional authenticated user
///
/// A missing or invalid token is treated as an anonymous caller.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl MaybeAuthUser {
    /// Viewer id used for per-user like status
    pub fn user_id(&self) -> Option<Snowflake> {
        self.0.as_ref().map(|user| user.user_id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Ok(TypedHeader(Authorization(bearer))) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await
        else {
            return Ok(MaybeAuthUser(None));
        };

        let user = user_from_bearer(&AppState::from_ref(state), bearer.token()).ok();
        Ok(MaybeAuthUser(user))
    }
}

/// Session named by the `refreshToken` cookie
#[derive(Debug, Clone, Copy)]
pub struct RefreshSession {
    pub user_id: Snowflake,
    pub binding: SessionBinding,
}

#[async_trait]
impl<S> FromRequestParts<S> for RefreshSession
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar
            .get(REFRESH_COOKIE)
            .filter(|c| !c.value().is_empty())
            .ok_or(ApiError::MissingRefreshToken)?;

        let (user_id, binding) = AppState::from_ref(state)
            .jwt_service()
            .validate_refresh_token(cookie.value())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid refresh token");
                ApiError::App(e)
            })?;

        Ok(RefreshSession { user_id, binding })
    }
}

/// Caller presenting the configured admin credentials via HTTP Basic
#[derive(Debug, Clone, Copy)]
pub struct AdminUser;

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(basic)) =
            TypedHeader::<Authorization<Basic>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InvalidAdminCredentials)?;

        let app_state = AppState::from_ref(state);
        let admin = app_state.admin();
        if basic.username() != admin.username || basic.password() != admin.password {
            tracing::warn!(username = basic.username(), "Rejected admin credentials");
            return Err(ApiError::InvalidAdminCredentials);
        }

        Ok(AdminUser)
    }
}
