//! User service
//!
//! Administrative user management behind basic auth.

use blog_core::traits::UserQuery;
use blog_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{PageResponse, RegisterRequest, UserResponse};

use super::auth::AuthService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Paged user listing with optional login/email search
    #[instrument(skip(self))]
    pub async fn list(&self, query: UserQuery) -> ServiceResult<PageResponse<UserResponse>> {
        let page = self.ctx.user_repo().find_page(&query).await?;
        Ok(PageResponse::from_page(page, UserResponse::from))
    }

    /// Create an already confirmed user
    #[instrument(skip(self, request), fields(login = %request.login))]
    pub async fn create(&self, request: RegisterRequest) -> ServiceResult<UserResponse> {
        let user = AuthService::new(self.ctx).new_user(request).await?;
        self.ctx.user_repo().create(&user).await?;

        info!(user_id = %user.id, "User created by admin");
        Ok(UserResponse::from(user))
    }

    /// Delete a user together with their sessions
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: Snowflake) -> ServiceResult<()> {
        if !self.ctx.user_repo().delete(user_id).await? {
            return Err(DomainError::UserNotFound(user_id).into());
        }

        info!(user_id = %user_id, "User deleted");
        Ok(())
    }
}
