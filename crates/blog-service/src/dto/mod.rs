//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    BlogInputRequest, BlogPostInputRequest, CommentInputRequest, ConfirmationCodeRequest,
    EmailRequest, LikeStatusRequest, LoginRequest, NewPasswordRequest, PostInputRequest,
    RegisterRequest,
};

pub use responses::{
    AccessTokenResponse, BlogResponse, CommentResponse, CommentatorInfoResponse, DeviceResponse,
    ExtendedLikesInfoResponse, HealthChecks, HealthResponse, IssuedTokens, LikesInfoResponse,
    MeResponse, NewestLikeResponse, PageResponse, PostResponse, ReadinessResponse, UserResponse,
};

pub use mappers::{CommentWithLikes, PostWithLikes};
