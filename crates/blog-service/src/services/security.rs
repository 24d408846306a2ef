//! Security service
//!
//! Lets a user inspect and terminate their own device sessions.

use blog_common::auth::SessionBinding;
use blog_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::DeviceResponse;

use super::auth::AuthService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Security service
pub struct SecurityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SecurityService<'a> {
    /// Create a new SecurityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Active devices of the user behind a live refresh token
    #[instrument(skip(self, binding))]
    pub async fn list_devices(
        &self,
        user_id: Snowflake,
        binding: SessionBinding,
    ) -> ServiceResult<Vec<DeviceResponse>> {
        AuthService::new(self.ctx).active_session(user_id, binding).await?;

        let sessions = self.ctx.session_repo().find_active_by_user(user_id).await?;
        Ok(sessions.into_iter().map(DeviceResponse::from).collect())
    }

    /// Terminate every session of the user, including the current one
    #[instrument(skip(self, binding))]
    pub async fn terminate_all(&self, user_id: Snowflake, binding: SessionBinding) -> ServiceResult<()> {
        let auth = AuthService::new(self.ctx);
        auth.active_session(user_id, binding).await?;
        auth.logout_all(user_id).await?;
        Ok(())
    }

    /// Terminate one device session owned by the user
    #[instrument(skip(self, binding))]
    pub async fn terminate_device(
        &self,
        user_id: Snowflake,
        binding: SessionBinding,
        device_id: &str,
    ) -> ServiceResult<()> {
        AuthService::new(self.ctx).active_session(user_id, binding).await?;

        let not_found = || DomainError::DeviceNotFound(device_id.to_string());
        let parsed = Uuid::parse_str(device_id).map_err(|_| not_found())?;

        let session = self
            .ctx
            .session_repo()
            .find_by_device(parsed)
            .await?
            .ok_or_else(not_found)?;

        if !session.belongs_to(user_id) {
            warn!(user_id = %user_id, device_id = %parsed, "Attempt to terminate foreign device");
            return Err(DomainError::NotDeviceOwner.into());
        }

        if !self.ctx.session_repo().delete_by_device(parsed).await? {
            return Err(not_found().into());
        }

        info!(user_id = %user_id, device_id = %parsed, "Device terminated");
        Ok(())
    }
}
