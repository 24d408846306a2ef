//! Comment handlers

use axum::{extract::State, Json};
use blog_service::{CommentInputRequest, CommentResponse, CommentService, LikeStatusRequest};

use crate::extractors::{AuthUser, IdPath, MaybeAuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// GET /comments/:id
pub async fn get_comment(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    IdPath(comment_id): IdPath,
) -> ApiResult<Json<CommentResponse>> {
    let comment = CommentService::new(state.services())
        .get(comment_id, viewer.user_id())
        .await?;
    Ok(Json(comment))
}

/// PUT /comments/:id
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(comment_id): IdPath,
    ValidatedJson(request): ValidatedJson<CommentInputRequest>,
) -> ApiResult<NoContent> {
    CommentService::new(state.services())
        .update(comment_id, auth.user_id, request)
        .await?;
    Ok(NoContent)
}

/// DELETE /comments/:id
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(comment_id): IdPath,
) -> ApiResult<NoContent> {
    CommentService::new(state.services())
        .delete(comment_id, auth.user_id)
        .await?;
    Ok(NoContent)
}

/// PUT /comments/:id/like-status
pub async fn set_comment_like_status(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(comment_id): IdPath,
    ValidatedJson(request): ValidatedJson<LikeStatusRequest>,
) -> ApiResult<NoContent> {
    CommentService::new(state.services())
        .set_like_status(comment_id, auth.user_id, request)
        .await?;
    Ok(NoContent)
}
