//! Post service

use blog_core::entities::{LikeTarget, Post};
use blog_core::{DomainError, PageQuery, Snowflake};
use tracing::{info, instrument};

use crate::dto::{BlogPostInputRequest, LikeStatusRequest, PageResponse, PostInputRequest, PostResponse};

use super::blog::BlogService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::like::LikeService;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        query: PageQuery,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<PageResponse<PostResponse>> {
        let mut page = self.ctx.post_repo().find_page(None, &query).await?;
        let posts = std::mem::take(&mut page.items);
        let items = LikeService::new(self.ctx).post_views(posts, viewer).await?;
        Ok(PageResponse::with_items(&page, items))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, post_id: Snowflake, viewer: Option<Snowflake>) -> ServiceResult<PostResponse> {
        let post = self.find(post_id).await?;
        LikeService::new(self.ctx).post_view(post, viewer).await
    }

    /// Load a post entity or fail with 404
    pub(crate) async fn find(&self, post_id: Snowflake) -> ServiceResult<Post> {
        Ok(self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?)
    }

    /// The referenced blog must exist; a bad reference is a field error
    async fn referenced_blog_id(&self, blog_id: &str) -> ServiceResult<Snowflake> {
        let unknown = || DomainError::UnknownBlogReference(blog_id.to_string());
        let id: Snowflake = blog_id.trim().parse().map_err(|_| unknown())?;

        if self.ctx.blog_repo().find_by_id(id).await?.is_none() {
            return Err(unknown().into());
        }
        Ok(id)
    }

    #[instrument(skip(self, request), fields(blog_id = %request.blog_id))]
    pub async fn create(&self, request: PostInputRequest) -> ServiceResult<PostResponse> {
        let (blog_id, input) = request.into_parts();
        let blog_id = self.referenced_blog_id(&blog_id).await?;

        let blogs = BlogService::new(self.ctx);
        let blog = blogs.find(blog_id).await?;
        blogs.insert_post(blog, input).await
    }

    #[instrument(skip(self, request))]
    pub async fn update(&self, post_id: Snowflake, request: PostInputRequest) -> ServiceResult<()> {
        let (blog_id, input) = request.into_parts();
        let blog_id = self.referenced_blog_id(&blog_id).await?;

        let mut post = self.find(post_id).await?;
        let BlogPostInputRequest {
            title,
            short_description,
            content,
        } = input;
        post.blog_id = blog_id;
        post.title = title.trim().to_string();
        post.short_description = short_description;
        post.content = content;

        if !self.ctx.post_repo().update(&post).await? {
            return Err(DomainError::PostNotFound(post_id).into());
        }

        info!(post_id = %post_id, "Post updated");
        Ok(())
    }

    /// Delete a post with its comments and their likes
    #[instrument(skip(self))]
    pub async fn delete(&self, post_id: Snowflake) -> ServiceResult<()> {
        if !self.ctx.post_repo().delete(post_id).await? {
            return Err(DomainError::PostNotFound(post_id).into());
        }

        info!(post_id = %post_id, "Post deleted");
        Ok(())
    }

    #[instrument(skip(self, request))]
    pub async fn set_like_status(
        &self,
        post_id: Snowflake,
        user_id: Snowflake,
        request: LikeStatusRequest,
    ) -> ServiceResult<()> {
        self.find(post_id).await?;
        LikeService::new(self.ctx)
            .set_status(user_id, LikeTarget::Post(post_id), request.status())
            .await
    }
}
