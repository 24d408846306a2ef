//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use blog_core::entities::{
    Blog, Comment, LikeCounts, LikeDetails, LikeStatus, Post, Session, User,
};

use super::responses::{
    BlogResponse, CommentResponse, CommentatorInfoResponse, DeviceResponse,
    ExtendedLikesInfoResponse, LikesInfoResponse, MeResponse, NewestLikeResponse, PostResponse,
    UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            login: user.login.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for MeResponse {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            login: user.login.clone(),
            user_id: user.id.to_string(),
        }
    }
}

/// Sessions are shown to their owner as devices
impl From<Session> for DeviceResponse {
    fn from(session: Session) -> Self {
        Self {
            ip: session.ip,
            title: session.user_agent,
            last_active_date: session.issued_at,
            device_id: session.device_id.to_string(),
        }
    }
}

// ============================================================================
// Content Mappers
// ============================================================================

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id.to_string(),
            name: blog.name,
            description: blog.description,
            website_url: blog.website_url,
            created_at: blog.created_at,
            is_membership: blog.is_membership,
        }
    }
}

impl From<LikeDetails> for NewestLikeResponse {
    fn from(like: LikeDetails) -> Self {
        Self {
            added_at: like.added_at,
            user_id: like.user_id.to_string(),
            login: like.login,
        }
    }
}

/// Post with its reaction summary as seen by one viewer
pub struct PostWithLikes {
    pub post: Post,
    pub counts: LikeCounts,
    pub my_status: LikeStatus,
    pub newest_likes: Vec<LikeDetails>,
}

impl From<PostWithLikes> for PostResponse {
    fn from(details: PostWithLikes) -> Self {
        let post = details.post;
        Self {
            id: post.id.to_string(),
            title: post.title,
            short_description: post.short_description,
            content: post.content,
            blog_id: post.blog_id.to_string(),
            blog_name: post.blog_name,
            created_at: post.created_at,
            extended_likes_info: ExtendedLikesInfoResponse {
                likes_count: details.counts.likes,
                dislikes_count: details.counts.dislikes,
                my_status: details.my_status,
                newest_likes: details
                    .newest_likes
                    .into_iter()
                    .map(NewestLikeResponse::from)
                    .collect(),
            },
        }
    }
}

/// Comment with its reaction summary as seen by one viewer
pub struct CommentWithLikes {
    pub comment: Comment,
    pub counts: LikeCounts,
    pub my_status: LikeStatus,
}

impl From<CommentWithLikes> for CommentResponse {
    fn from(details: CommentWithLikes) -> Self {
        let comment = details.comment;
        Self {
            id: comment.id.to_string(),
            content: comment.content,
            commentator_info: CommentatorInfoResponse {
                user_id: comment.author_id.to_string(),
                user_login: comment.author_login,
            },
            created_at: comment.created_at,
            likes_info: LikesInfoResponse {
                likes_count: details.counts.likes,
                dislikes_count: details.counts.dislikes,
                my_status: details.my_status,
            },
        }
    }
}
