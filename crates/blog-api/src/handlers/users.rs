//! Admin user handlers

use axum::{extract::State, Json};
use blog_service::{PageResponse, RegisterRequest, UserResponse, UserService};

use crate::extractors::{AdminUser, IdPath, PageParams, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
    params: PageParams,
) -> ApiResult<Json<PageResponse<UserResponse>>> {
    let page = UserService::new(state.services())
        .list(params.user_query())
        .await?;
    Ok(Json(page))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let user = UserService::new(state.services()).create(request).await?;
    Ok(Created(Json(user)))
}

/// DELETE /users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(user_id): IdPath,
) -> ApiResult<NoContent> {
    UserService::new(state.services()).delete(user_id).await?;
    Ok(NoContent)
}
