//! Comment service
//!
//! Comments hang off posts. Only the author may edit or delete one.

use blog_core::entities::{Comment, LikeTarget};
use blog_core::{DomainError, PageQuery, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{CommentInputRequest, CommentResponse, LikeStatusRequest, PageResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::like::LikeService;
use super::post::PostService;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list_for_post(
        &self,
        post_id: Snowflake,
        query: PageQuery,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<PageResponse<CommentResponse>> {
        PostService::new(self.ctx).find(post_id).await?;

        let mut page = self.ctx.comment_repo().find_by_post(post_id, &query).await?;
        let comments = std::mem::take(&mut page.items);
        let items = LikeService::new(self.ctx).comment_views(comments, viewer).await?;
        Ok(PageResponse::with_items(&page, items))
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        post_id: Snowflake,
        user_id: Snowflake,
        request: CommentInputRequest,
    ) -> ServiceResult<CommentResponse> {
        PostService::new(self.ctx).find(post_id).await?;

        let author = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let comment = Comment::new(
            self.ctx.generate_id(),
            post_id,
            author.id,
            author.login,
            request.content,
        );
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, post_id = %post_id, "Comment created");
        LikeService::new(self.ctx).comment_view(comment, Some(user_id)).await
    }

    #[instrument(skip(self))]
    pub async fn get(
        &self,
        comment_id: Snowflake,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<CommentResponse> {
        let comment = self.find(comment_id).await?;
        LikeService::new(self.ctx).comment_view(comment, viewer).await
    }

    async fn find(&self, comment_id: Snowflake) -> ServiceResult<Comment> {
        Ok(self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?)
    }

    async fn find_owned(&self, comment_id: Snowflake, user_id: Snowflake) -> ServiceResult<Comment> {
        let comment = self.find(comment_id).await?;
        if !comment.is_author(user_id) {
            warn!(comment_id = %comment_id, user_id = %user_id, "Comment change by non-author");
            return Err(DomainError::NotCommentAuthor.into());
        }
        Ok(comment)
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        comment_id: Snowflake,
        user_id: Snowflake,
        request: CommentInputRequest,
    ) -> ServiceResult<()> {
        self.find_owned(comment_id, user_id).await?;

        if !self
            .ctx
            .comment_repo()
            .update_content(comment_id, &request.content)
            .await?
        {
            return Err(DomainError::CommentNotFound(comment_id).into());
        }

        info!(comment_id = %comment_id, "Comment updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, comment_id: Snowflake, user_id: Snowflake) -> ServiceResult<()> {
        self.find_owned(comment_id, user_id).await?;

        if !self.ctx.comment_repo().delete(comment_id).await? {
            return Err(DomainError::CommentNotFound(comment_id).into());
        }

        info!(comment_id = %comment_id, "Comment deleted");
        Ok(())
    }

    #[instrument(skip(self, request))]
    pub async fn set_like_status(
        &self,
        comment_id: Snowflake,
        user_id: Snowflake,
        request: LikeStatusRequest,
    ) -> ServiceResult<()> {
        self.find(comment_id).await?;
        LikeService::new(self.ctx)
            .set_status(user_id, LikeTarget::Comment(comment_id), request.status())
            .await
    }
}
