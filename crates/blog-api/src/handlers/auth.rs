//! Authentication handlers
//!
//! Registration, email confirmation, login, refresh-token rotation, logout
//! and password recovery.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse},
    Json,
};
use axum_extra::{headers::UserAgent, TypedHeader};
use blog_service::{
    AccessTokenResponse, AuthService, ClientInfo, ConfirmationCodeRequest, EmailRequest,
    IssuedTokens, LoginRequest, MeResponse, NewPasswordRequest, RegisterRequest,
};

use crate::extractors::{AuthUser, RefreshSession, ValidatedJson, REFRESH_COOKIE};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

fn refresh_cookie(tokens: &IssuedTokens) -> String {
    format!(
        "{REFRESH_COOKIE}={}; HttpOnly; Secure; Path=/; Max-Age={}",
        tokens.refresh_token, tokens.refresh_expires_in
    )
}

fn expired_refresh_cookie() -> String {
    format!("{REFRESH_COOKIE}=; HttpOnly; Secure; Path=/; Max-Age=0")
}

fn with_refresh_cookie(tokens: &IssuedTokens) -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, refresh_cookie(tokens))]),
        Json::<AccessTokenResponse>(tokens.body()),
    )
}

/// Register a new user and mail the confirmation code
///
/// POST /auth/registration
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<NoContent> {
    AuthService::new(state.services()).register(request).await?;
    Ok(NoContent)
}

/// POST /auth/registration-confirmation
pub async fn confirm_registration(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ConfirmationCodeRequest>,
) -> ApiResult<NoContent> {
    AuthService::new(state.services())
        .confirm_registration(request)
        .await?;
    Ok(NoContent)
}

/// POST /auth/registration-email-resending
pub async fn resend_confirmation(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<EmailRequest>,
) -> ApiResult<NoContent> {
    AuthService::new(state.services())
        .resend_confirmation(request)
        .await?;
    Ok(NoContent)
}

/// Login with login or email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    user_agent: Option<TypedHeader<UserAgent>>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let ip = connect_info.map_or_else(|| "unknown".to_string(), |ConnectInfo(addr)| addr.ip().to_string());
    let client = ClientInfo::new(ip, user_agent.map(|TypedHeader(ua)| ua.as_str().to_string()));

    let tokens = AuthService::new(state.services())
        .login(request, client)
        .await?;
    Ok(with_refresh_cookie(&tokens))
}

/// Rotate the session and reissue both tokens
///
/// POST /auth/refresh-token
pub async fn refresh_token(
    State(state): State<AppState>,
    session: RefreshSession,
) -> ApiResult<impl IntoResponse> {
    let tokens = AuthService::new(state.services())
        .refresh(session.user_id, session.binding)
        .await?;
    Ok(with_refresh_cookie(&tokens))
}

/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    session: RefreshSession,
) -> ApiResult<impl IntoResponse> {
    AuthService::new(state.services())
        .logout(session.user_id, session.binding)
        .await?;
    Ok((AppendHeaders([(SET_COOKIE, expired_refresh_cookie())]), NoContent))
}

/// GET /auth/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<MeResponse>> {
    let me = AuthService::new(state.services()).me(auth.user_id).await?;
    Ok(Json(me))
}

/// POST /auth/password-recovery
pub async fn password_recovery(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<EmailRequest>,
) -> ApiResult<NoContent> {
    AuthService::new(state.services())
        .password_recovery(request)
        .await?;
    Ok(NoContent)
}

/// POST /auth/new-password
pub async fn new_password(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<NewPasswordRequest>,
) -> ApiResult<NoContent> {
    AuthService::new(state.services()).new_password(request).await?;
    Ok(NoContent)
}
