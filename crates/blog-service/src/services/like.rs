//! Like service
//!
//! Stores reactions and assembles the per-viewer like summaries attached to
//! posts and comments.

use std::collections::HashMap;

use blog_core::entities::{Comment, Like, LikeStatus, LikeTarget, Post};
use blog_core::Snowflake;
use tracing::{debug, instrument};

use crate::dto::{CommentResponse, CommentWithLikes, PostResponse, PostWithLikes};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Number of recent likers shown on a post
pub const NEWEST_LIKES_LIMIT: i64 = 3;

/// Like service
pub struct LikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeService<'a> {
    /// Create a new LikeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Set the caller's reaction; `None` removes it
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        user_id: Snowflake,
        target: LikeTarget,
        status: LikeStatus,
    ) -> ServiceResult<()> {
        let like = Like::new(user_id, target, status);
        self.ctx.like_repo().set_status(&like).await?;
        debug!(kind = target.kind(), target_id = %target.id(), %status, "Like status set");
        Ok(())
    }

    async fn my_statuses(
        &self,
        viewer: Option<Snowflake>,
        targets: &[LikeTarget],
    ) -> ServiceResult<HashMap<LikeTarget, LikeStatus>> {
        match viewer {
            Some(user_id) => Ok(self.ctx.like_repo().statuses_of(user_id, targets).await?),
            None => Ok(HashMap::new()),
        }
    }

    /// Post with counts, the viewer's status and the newest likers
    pub async fn post_view(&self, post: Post, viewer: Option<Snowflake>) -> ServiceResult<PostResponse> {
        let mut views = self.post_views(vec![post], viewer).await?;
        views.pop().ok_or_else(|| ServiceError::internal("missing post view"))
    }

    /// Like summaries for a page of posts, three queries regardless of size
    pub async fn post_views(
        &self,
        posts: Vec<Post>,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<Vec<PostResponse>> {
        let targets: Vec<LikeTarget> = posts.iter().map(|p| LikeTarget::Post(p.id)).collect();
        let mut counts = self.ctx.like_repo().counts(&targets).await?;
        let mut statuses = self.my_statuses(viewer, &targets).await?;
        let mut newest = self
            .ctx
            .like_repo()
            .newest_likes(&targets, NEWEST_LIKES_LIMIT)
            .await?;

        Ok(posts
            .into_iter()
            .zip(targets)
            .map(|(post, target)| {
                PostResponse::from(PostWithLikes {
                    post,
                    counts: counts.remove(&target).unwrap_or_default(),
                    my_status: statuses.remove(&target).unwrap_or_default(),
                    newest_likes: newest.remove(&target).unwrap_or_default(),
                })
            })
            .collect())
    }

    /// Comment with counts and the viewer's status
    pub async fn comment_view(
        &self,
        comment: Comment,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<CommentResponse> {
        let mut views = self.comment_views(vec![comment], viewer).await?;
        views.pop().ok_or_else(|| ServiceError::internal("missing comment view"))
    }

    pub async fn comment_views(
        &self,
        comments: Vec<Comment>,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<Vec<CommentResponse>> {
        let targets: Vec<LikeTarget> = comments.iter().map(|c| LikeTarget::Comment(c.id)).collect();
        let mut counts = self.ctx.like_repo().counts(&targets).await?;
        let mut statuses = self.my_statuses(viewer, &targets).await?;

        Ok(comments
            .into_iter()
            .zip(targets)
            .map(|(comment, target)| {
                CommentResponse::from(CommentWithLikes {
                    comment,
                    counts: counts.remove(&target).unwrap_or_default(),
                    my_status: statuses.remove(&target).unwrap_or_default(),
                })
            })
            .collect())
    }
}
