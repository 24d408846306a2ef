//! Blog handlers

use axum::{extract::State, Json};
use blog_service::{
    BlogInputRequest, BlogPostInputRequest, BlogResponse, BlogService, PageResponse, PostResponse,
};

use crate::extractors::{AdminUser, IdPath, MaybeAuthUser, PageParams, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /blogs
pub async fn list_blogs(
    State(state): State<AppState>,
    params: PageParams,
) -> ApiResult<Json<PageResponse<BlogResponse>>> {
    let page = BlogService::new(state.services())
        .list(params.blog_query())
        .await?;
    Ok(Json(page))
}

/// GET /blogs/:id
pub async fn get_blog(
    State(state): State<AppState>,
    IdPath(blog_id): IdPath,
) -> ApiResult<Json<BlogResponse>> {
    let blog = BlogService::new(state.services()).get(blog_id).await?;
    Ok(Json(blog))
}

/// POST /blogs
pub async fn create_blog(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<BlogInputRequest>,
) -> ApiResult<Created<Json<BlogResponse>>> {
    let blog = BlogService::new(state.services()).create(request).await?;
    Ok(Created(Json(blog)))
}

/// PUT /blogs/:id
pub async fn update_blog(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(blog_id): IdPath,
    ValidatedJson(request): ValidatedJson<BlogInputRequest>,
) -> ApiResult<NoContent> {
    BlogService::new(state.services())
        .update(blog_id, request)
        .await?;
    Ok(NoContent)
}

/// DELETE /blogs/:id
pub async fn delete_blog(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(blog_id): IdPath,
) -> ApiResult<NoContent> {
    BlogService::new(state.services()).delete(blog_id).await?;
    Ok(NoContent)
}

/// GET /blogs/:id/posts
pub async fn list_blog_posts(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    IdPath(blog_id): IdPath,
    params: PageParams,
) -> ApiResult<Json<PageResponse<PostResponse>>> {
    let page = BlogService::new(state.services())
        .list_posts(blog_id, params.page(), viewer.user_id())
        .await?;
    Ok(Json(page))
}

/// POST /blogs/:id/posts
pub async fn create_blog_post(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(blog_id): IdPath,
    ValidatedJson(request): ValidatedJson<BlogPostInputRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let post = BlogService::new(state.services())
        .create_post(blog_id, request)
        .await?;
    Ok(Created(Json(post)))
}
