//! Authentication service
//!
//! Handles registration with email confirmation, login, refresh-token
//! rotation, logout and password recovery.
//!
//! Every refresh token is bound to a row in the session store: the token's
//! `session_id` claim is the row's current `token_key`. Rotating the key on
//! refresh retires the previous token even before it expires.

use blog_common::auth::{hash_password, verify_credentials, SessionBinding};
use blog_common::AppError;
use blog_core::entities::{EmailConfirmation, PasswordRecovery, Session, User};
use blog_core::{DomainError, Snowflake};
use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{
    ConfirmationCodeRequest, EmailRequest, IssuedTokens, LoginRequest, MeResponse,
    NewPasswordRequest, RegisterRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Where a login request came from
#[derive(Debug, Clone)]
pub struct ClientInfo {
    pub ip: String,
    pub user_agent: String,
}

impl ClientInfo {
    pub fn new(ip: impl Into<String>, user_agent: Option<String>) -> Self {
        Self {
            ip: ip.into(),
            user_agent: user_agent
                .filter(|ua| !ua.trim().is_empty())
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new, unconfirmed user and mail the confirmation code
    #[instrument(skip(self, request), fields(login = %request.login, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<()> {
        let user = self.new_user(request).await?;
        let ttl = self.ctx.code_lifetimes().email_confirmation;
        let user = User::new(user.id, user.login, user.email, user.password_hash, ttl);

        self.ctx.user_repo().create(&user).await?;
        info!(user_id = %user.id, "User registered");

        // Delivery failures leave the account in place; the code can be resent
        if let Err(e) = self
            .ctx
            .mailer()
            .send_confirmation_code(&user.email, user.email_confirmation.code)
            .await
        {
            warn!(user_id = %user.id, error = %e, "Failed to send confirmation code");
        }

        Ok(())
    }

    /// Check uniqueness and hash the password for a new account.
    /// The returned user is confirmed; callers decide the confirmation state.
    pub(crate) async fn new_user(&self, request: RegisterRequest) -> ServiceResult<User> {
        if self.ctx.user_repo().login_exists(&request.login).await? {
            return Err(DomainError::LoginAlreadyExists.into());
        }
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = hash_password(&request.password)?;

        Ok(User::new_confirmed(
            self.ctx.generate_id(),
            request.login,
            request.email,
            password_hash,
        ))
    }

    /// Confirm an account with the mailed code. Single use.
    #[instrument(skip(self, request))]
    pub async fn confirm_registration(&self, request: ConfirmationCodeRequest) -> ServiceResult<()> {
        let code = Uuid::parse_str(request.code.trim())
            .map_err(|_| DomainError::InvalidConfirmationCode)?;

        let user_id = self
            .ctx
            .user_repo()
            .confirm_email(code, Utc::now())
            .await?
            .ok_or(DomainError::InvalidConfirmationCode)?;

        info!(user_id = %user_id, "Email confirmed");
        Ok(())
    }

    /// Issue a fresh confirmation code; the previous one stops working
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn resend_confirmation(&self, request: EmailRequest) -> ServiceResult<()> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .filter(|user| !user.is_confirmed())
            .ok_or(DomainError::EmailNotResendable)?;

        let confirmation = EmailConfirmation::issue(self.ctx.code_lifetimes().email_confirmation);
        self.ctx
            .user_repo()
            .update_confirmation_code(user.id, confirmation.code, confirmation.expires_at)
            .await?;

        self.ctx
            .mailer()
            .send_confirmation_code(&user.email, confirmation.code)
            .await?;

        info!(user_id = %user.id, "Confirmation code reissued");
        Ok(())
    }

    /// Login with login or email and open a new device session
    #[instrument(skip(self, request, client), fields(login_or_email = %request.login_or_email, ip = %client.ip))]
    pub async fn login(&self, request: LoginRequest, client: ClientInfo) -> ServiceResult<IssuedTokens> {
        let user = self
            .ctx
            .user_repo()
            .find_by_login_or_email(&request.login_or_email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        verify_credentials(&request.password, &user.password_hash).map_err(|e| {
            warn!(user_id = %user.id, "Login failed: invalid password");
            ServiceError::App(e)
        })?;

        if !user.is_confirmed() {
            warn!(user_id = %user.id, "Login failed: email not confirmed");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let session = Session::new(
            user.id,
            client.ip,
            client.user_agent,
            self.ctx.jwt_service().refresh_token_ttl(),
        );
        self.ctx.session_repo().create(&session).await?;

        info!(user_id = %user.id, device_id = %session.device_id, "User logged in");

        self.issue_tokens(&session)
    }

    /// Load the live session a refresh token is bound to
    #[instrument(skip(self, binding))]
    pub async fn active_session(
        &self,
        user_id: Snowflake,
        binding: SessionBinding,
    ) -> ServiceResult<Session> {
        let session = self
            .ctx
            .session_repo()
            .find_by_token_key(user_id, binding.token_key)
            .await?
            .filter(|session| session.device_id == binding.device_id)
            .ok_or_else(|| {
                warn!(user_id = %user_id, "Refresh token does not match an active session");
                ServiceError::App(AppError::SessionRevoked)
            })?;

        Ok(session)
    }

    /// Rotate the session key and reissue both tokens
    #[instrument(skip(self, binding))]
    pub async fn refresh(&self, user_id: Snowflake, binding: SessionBinding) -> ServiceResult<IssuedTokens> {
        let session = self.active_session(user_id, binding).await?;
        let rotated = session.rotated(self.ctx.jwt_service().refresh_token_ttl());

        // A concurrent refresh with the same token loses the race here
        if !self.ctx.session_repo().rotate(binding.token_key, &rotated).await? {
            warn!(user_id = %user_id, device_id = %session.device_id, "Session rotated concurrently");
            return Err(ServiceError::App(AppError::SessionRevoked));
        }

        info!(user_id = %user_id, device_id = %rotated.device_id, "Tokens refreshed");
        self.issue_tokens(&rotated)
    }

    /// Terminate the session behind the presented refresh token
    #[instrument(skip(self, binding))]
    pub async fn logout(&self, user_id: Snowflake, binding: SessionBinding) -> ServiceResult<()> {
        let session = self.active_session(user_id, binding).await?;

        self.ctx
            .session_repo()
            .delete_by_token_key(session.token_key)
            .await?;

        if self.ctx.session_repo().exists(user_id, session.token_key).await? {
            return Err(ServiceError::internal("Session not terminated"));
        }

        info!(user_id = %user_id, device_id = %session.device_id, "User logged out");
        Ok(())
    }

    /// Terminate every session of the user
    #[instrument(skip(self))]
    pub async fn logout_all(&self, user_id: Snowflake) -> ServiceResult<u64> {
        let removed = self.ctx.session_repo().delete_all_for_user(user_id).await?;
        info!(user_id = %user_id, removed, "All sessions terminated");
        Ok(removed)
    }

    /// Current user info for a valid access token
    #[instrument(skip(self))]
    pub async fn me(&self, user_id: Snowflake) -> ServiceResult<MeResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::Unauthorized)?;

        Ok(MeResponse::from(&user))
    }

    /// Mail a recovery code. Unknown emails succeed silently.
    #[instrument(skip(self, request))]
    pub async fn password_recovery(&self, request: EmailRequest) -> ServiceResult<()> {
        let Some(user) = self.ctx.user_repo().find_by_email(&request.email).await? else {
            return Ok(());
        };

        let recovery = PasswordRecovery::issue(self.ctx.code_lifetimes().password_recovery);
        self.ctx
            .user_repo()
            .set_recovery_code(user.id, recovery.code, recovery.expires_at)
            .await?;

        if let Err(e) = self
            .ctx
            .mailer()
            .send_recovery_code(&user.email, recovery.code)
            .await
        {
            warn!(user_id = %user.id, error = %e, "Failed to send recovery code");
        }

        info!(user_id = %user.id, "Password recovery requested");
        Ok(())
    }

    /// Set a new password with a recovery code, then end all sessions
    #[instrument(skip(self, request))]
    pub async fn new_password(&self, request: NewPasswordRequest) -> ServiceResult<()> {
        let code = Uuid::parse_str(request.recovery_code.trim())
            .map_err(|_| DomainError::InvalidRecoveryCode)?;

        let password_hash = hash_password(&request.new_password)?;

        let user_id = self
            .ctx
            .user_repo()
            .reset_password(code, &password_hash, Utc::now())
            .await?
            .ok_or(DomainError::InvalidRecoveryCode)?;

        info!(user_id = %user_id, "Password changed");
        self.logout_all(user_id).await?;
        Ok(())
    }

    fn issue_tokens(&self, session: &Session) -> ServiceResult<IssuedTokens> {
        let binding = SessionBinding {
            token_key: session.token_key,
            device_id: session.device_id,
        };
        let pair = self.ctx.jwt_service().issue_pair(session.user_id, binding)?;

        Ok(IssuedTokens {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            refresh_expires_in: pair.refresh_expires_in,
        })
    }
}
