//! Like entity - a user's reaction (like / dislike) on a post or comment

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Reaction a user holds on a target. `None` means no row is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LikeStatus {
    #[default]
    None,
    Like,
    Dislike,
}

impl LikeStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Like => "Like",
            Self::Dislike => "Dislike",
        }
    }
}

impl fmt::Display for LikeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LikeStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(Self::None),
            "Like" => Ok(Self::Like),
            "Dislike" => Ok(Self::Dislike),
            other => Err(DomainError::InvalidLikeStatus(other.to_string())),
        }
    }
}

/// What a like points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LikeTarget {
    Post(Snowflake),
    Comment(Snowflake),
}

impl LikeTarget {
    /// Discriminator stored alongside the target id
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Post(_) => "post",
            Self::Comment(_) => "comment",
        }
    }

    pub const fn id(self) -> Snowflake {
        match self {
            Self::Post(id) | Self::Comment(id) => id,
        }
    }

    /// Rebuild a target from its stored discriminator and id
    pub fn from_stored(kind: &str, id: Snowflake) -> Option<Self> {
        match kind {
            "post" => Some(Self::Post(id)),
            "comment" => Some(Self::Comment(id)),
            _ => None,
        }
    }
}

/// A user's stored reaction on a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub user_id: Snowflake,
    pub target: LikeTarget,
    pub status: LikeStatus,
    pub updated_at: DateTime<Utc>,
}

impl Like {
    pub fn new(user_id: Snowflake, target: LikeTarget, status: LikeStatus) -> Self {
        Self {
            user_id,
            target,
            status,
            updated_at: Utc::now(),
        }
    }

    /// `None` clears the reaction instead of storing it
    #[inline]
    pub fn is_removal(&self) -> bool {
        self.status == LikeStatus::None
    }
}

/// Aggregated counters for one target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LikeCounts {
    pub likes: i64,
    pub dislikes: i64,
}

/// A "Like" entry shown in a post's newest likes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeDetails {
    pub user_id: Snowflake,
    pub login: String,
    pub added_at: DateTime<Utc>,
}
