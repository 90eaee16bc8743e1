use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::domain::shared::errors::DomainError;

/// Kinds of posts that can carry a like reaction.
///
/// Closed set: each variant maps to a fixed like table, so an unvalidated
/// type string can never reach storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PostType {
    Comment,
    Discussion,
}

impl PostType {
    /// Like table and post-id column backing this post type.
    pub fn like_table(self) -> (&'static str, &'static str) {
        match self {
            PostType::Comment => ("user_comment_likes", "comment_id"),
            PostType::Discussion => ("user_discussion_likes", "discussion_id"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PostType::Comment => "Comment",
            PostType::Discussion => "Discussion",
        }
    }

    pub fn as_lower(self) -> &'static str {
        match self {
            PostType::Comment => "comment",
            PostType::Discussion => "discussion",
        }
    }
}

impl FromStr for PostType {
    type Err = DomainError;

    /// Case-normalizing parse; anything outside the closed set is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "comment" => Ok(PostType::Comment),
            "discussion" => Ok(PostType::Discussion),
            other => Err(DomainError::InvalidPostType(other.to_string())),
        }
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A post addressed by kind and id.
///
/// Post content is owned by the forum's content subsystem; this service only
/// references posts and never mutates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PostRef {
    pub post_type: PostType,
    pub post_id: i64,
}

impl PostRef {
    pub fn new(post_type: PostType, post_id: i64) -> Result<Self, DomainError> {
        if post_id <= 0 {
            return Err(DomainError::ValidationError(format!(
                "post id must be a positive integer, got {post_id}"
            )));
        }
        Ok(Self { post_type, post_id })
    }

    /// Route a reader follows from a like notification.
    pub fn route(&self) -> String {
        match self.post_type {
            PostType::Discussion => format!("/discussion/{}", self.post_id),
            PostType::Comment => format!("/discussion/comment/{}", self.post_id),
        }
    }
}

impl fmt::Display for PostRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.post_type, self.post_id)
    }
}
