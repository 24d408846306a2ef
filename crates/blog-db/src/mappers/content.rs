//! Blog, post, comment and like model -> entity mappers

use blog_core::entities::{Blog, Comment, LikeCounts, LikeDetails, LikeTarget, Post};
use blog_core::value_objects::Snowflake;

use crate::models::{
    BlogModel, CommentModel, LikeCountsModel, LikeDetailsModel, LikeStatusModel, PostModel,
};

impl From<BlogModel> for Blog {
    fn from(model: BlogModel) -> Self {
        Blog {
            id: Snowflake::new(model.id),
            name: model.name,
            description: model.description,
            website_url: model.website_url,
            is_membership: model.is_membership,
            created_at: model.created_at,
        }
    }
}

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: Snowflake::new(model.id),
            blog_id: Snowflake::new(model.blog_id),
            blog_name: model.blog_name,
            title: model.title,
            short_description: model.short_description,
            content: model.content,
            created_at: model.created_at,
        }
    }
}

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            post_id: Snowflake::new(model.post_id),
            author_id: Snowflake::new(model.user_id),
            author_login: model.user_login,
            content: model.content,
            created_at: model.created_at,
        }
    }
}

impl LikeStatusModel {
    pub fn target(&self) -> Option<LikeTarget> {
        LikeTarget::from_stored(&self.target_type, Snowflake::new(self.target_id))
    }
}

impl LikeCountsModel {
    pub fn target(&self) -> Option<LikeTarget> {
        LikeTarget::from_stored(&self.target_type, Snowflake::new(self.target_id))
    }
}

impl LikeDetailsModel {
    pub fn target(&self) -> Option<LikeTarget> {
        LikeTarget::from_stored(&self.target_type, Snowflake::new(self.target_id))
    }
}

impl From<LikeCountsModel> for LikeCounts {
    fn from(model: LikeCountsModel) -> Self {
        LikeCounts {
            likes: model.likes,
            dislikes: model.dislikes,
        }
    }
}

impl From<LikeDetailsModel> for LikeDetails {
    fn from(model: LikeDetailsModel) -> Self {
        LikeDetails {
            user_id: Snowflake::new(model.user_id),
            login: model.login,
            added_at: model.added_at,
        }
    }
}
