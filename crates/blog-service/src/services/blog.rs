//! Blog service
//!
//! Blog CRUD and posts scoped to a blog.

use blog_core::entities::{Blog, Post};
use blog_core::traits::BlogQuery;
use blog_core::{DomainError, PageQuery, Snowflake};
use tracing::{info, instrument};

use crate::dto::{BlogInputRequest, BlogPostInputRequest, BlogResponse, PageResponse, PostResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::like::LikeService;

/// Blog service
pub struct BlogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BlogService<'a> {
    /// Create a new BlogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: BlogQuery) -> ServiceResult<PageResponse<BlogResponse>> {
        let page = self.ctx.blog_repo().find_page(&query).await?;
        Ok(PageResponse::from_page(page, BlogResponse::from))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, blog_id: Snowflake) -> ServiceResult<BlogResponse> {
        Ok(BlogResponse::from(self.find(blog_id).await?))
    }

    /// Load a blog entity or fail with 404
    pub(crate) async fn find(&self, blog_id: Snowflake) -> ServiceResult<Blog> {
        Ok(self
            .ctx
            .blog_repo()
            .find_by_id(blog_id)
            .await?
            .ok_or(DomainError::BlogNotFound(blog_id))?)
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: BlogInputRequest) -> ServiceResult<BlogResponse> {
        let blog = Blog::new(
            self.ctx.generate_id(),
            request.name.trim().to_string(),
            request.description,
            request.website_url,
        );
        self.ctx.blog_repo().create(&blog).await?;

        info!(blog_id = %blog.id, "Blog created");
        Ok(BlogResponse::from(blog))
    }

    #[instrument(skip(self, request))]
    pub async fn update(&self, blog_id: Snowflake, request: BlogInputRequest) -> ServiceResult<()> {
        let mut blog = self.find(blog_id).await?;
        blog.apply_update(
            request.name.trim().to_string(),
            request.description,
            request.website_url,
        );

        if !self.ctx.blog_repo().update(&blog).await? {
            return Err(DomainError::BlogNotFound(blog_id).into());
        }

        info!(blog_id = %blog_id, "Blog updated");
        Ok(())
    }

    /// Delete a blog with its posts, comments and their likes
    #[instrument(skip(self))]
    pub async fn delete(&self, blog_id: Snowflake) -> ServiceResult<()> {
        if !self.ctx.blog_repo().delete(blog_id).await? {
            return Err(DomainError::BlogNotFound(blog_id).into());
        }

        info!(blog_id = %blog_id, "Blog deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list_posts(
        &self,
        blog_id: Snowflake,
        query: PageQuery,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<PageResponse<PostResponse>> {
        self.find(blog_id).await?;

        let mut page = self.ctx.post_repo().find_page(Some(blog_id), &query).await?;
        let posts = std::mem::take(&mut page.items);
        let items = LikeService::new(self.ctx).post_views(posts, viewer).await?;
        Ok(PageResponse::with_items(&page, items))
    }

    #[instrument(skip(self, request))]
    pub async fn create_post(
        &self,
        blog_id: Snowflake,
        request: BlogPostInputRequest,
    ) -> ServiceResult<PostResponse> {
        let blog = self.find(blog_id).await?;
        self.insert_post(blog, request).await
    }

    /// Persist a new post under an already loaded blog
    pub(crate) async fn insert_post(
        &self,
        blog: Blog,
        request: BlogPostInputRequest,
    ) -> ServiceResult<PostResponse> {
        let post = Post::new(
            self.ctx.generate_id(),
            blog.id,
            blog.name,
            request.title.trim().to_string(),
            request.short_description,
            request.content,
        );
        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post.id, blog_id = %post.blog_id, "Post created");
        LikeService::new(self.ctx).post_view(post, None).await
    }
}
