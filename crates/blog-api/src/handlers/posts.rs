//! Post handlers
//!
//! Includes the comment listing and like status of a post.

use axum::{extract::State, Json};
use blog_service::{
    CommentInputRequest, CommentResponse, CommentService, LikeStatusRequest, PageResponse,
    PostInputRequest, PostResponse, PostService,
};

use crate::extractors::{AdminUser, AuthUser, IdPath, MaybeAuthUser, PageParams, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /posts
pub async fn list_posts(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    params: PageParams,
) -> ApiResult<Json<PageResponse<PostResponse>>> {
    let page = PostService::new(state.services())
        .list(params.page(), viewer.user_id())
        .await?;
    Ok(Json(page))
}

/// GET /posts/:id
pub async fn get_post(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    IdPath(post_id): IdPath,
) -> ApiResult<Json<PostResponse>> {
    let post = PostService::new(state.services())
        .get(post_id, viewer.user_id())
        .await?;
    Ok(Json(post))
}

/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<PostInputRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let post = PostService::new(state.services()).create(request).await?;
    Ok(Created(Json(post)))
}

/// PUT /posts/:id
pub async fn update_post(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(post_id): IdPath,
    ValidatedJson(request): ValidatedJson<PostInputRequest>,
) -> ApiResult<NoContent> {
    PostService::new(state.services())
        .update(post_id, request)
        .await?;
    Ok(NoContent)
}

/// DELETE /posts/:id
pub async fn delete_post(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(post_id): IdPath,
) -> ApiResult<NoContent> {
    PostService::new(state.services()).delete(post_id).await?;
    Ok(NoContent)
}

/// GET /posts/:id/comments
pub async fn list_post_comments(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    IdPath(post_id): IdPath,
    params: PageParams,
) -> ApiResult<Json<PageResponse<CommentResponse>>> {
    let page = CommentService::new(state.services())
        .list_for_post(post_id, params.page(), viewer.user_id())
        .await?;
    Ok(Json(page))
}

/// POST /posts/:id/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath,
    ValidatedJson(request): ValidatedJson<CommentInputRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let comment = CommentService::new(state.services())
        .create(post_id, auth.user_id, request)
        .await?;
    Ok(Created(Json(comment)))
}

/// PUT /posts/:id/like-status
pub async fn set_post_like_status(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath,
    ValidatedJson(request): ValidatedJson<LikeStatusRequest>,
) -> ApiResult<NoContent> {
    PostService::new(state.services())
        .set_like_status(post_id, auth.user_id, request)
        .await?;
    Ok(NoContent)
}
