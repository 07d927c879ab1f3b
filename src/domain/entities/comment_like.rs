//! Comment like entities and repository trait.
//!
//! Maps to the `comment_likes` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::payload::require_present;
use crate::shared::error::AppError;
use crate::shared::validation::{Entity, ValidationError};

/// A user's like on a comment.
///
/// Maps to the `comment_likes` table:
/// - id: VARCHAR(50) PRIMARY KEY
/// - comment_id: VARCHAR(50) NOT NULL REFERENCES comments(id)
/// - user_id: VARCHAR(50) NOT NULL REFERENCES users(id)
/// - is_liked: BOOLEAN NOT NULL
///
/// UNIQUE (comment_id, user_id): a row is created on the first like and
/// toggled in place afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentLike {
    pub id: String,
    pub comment_id: String,
    pub user_id: String,
    pub is_liked: bool,
}

/// A validated like/unlike request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentLikePayload {
    pub thread_id: String,
    pub comment_id: String,
    pub user_id: String,
}

impl CommentLikePayload {
    pub fn new(thread_id: &str, comment_id: &str, user_id: &str) -> Result<Self, ValidationError> {
        require_present(Entity::CommentLike, &[thread_id, comment_id, user_id])?;

        Ok(Self {
            thread_id: thread_id.to_string(),
            comment_id: comment_id.to_string(),
            user_id: user_id.to_string(),
        })
    }
}

/// Number of active likes on a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentLikeCount {
    pub comment_id: String,
    pub count: i64,
}

/// Repository trait for CommentLike data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentLikeRepository: Send + Sync {
    /// Find the like row of a user on a comment, if any.
    async fn find_comment_like(
        &self,
        comment_id: &str,
        user_id: &str,
    ) -> Result<Option<CommentLike>, AppError>;

    /// Insert the like row for a (comment, user) pair.
    async fn add_comment_like(
        &self,
        comment_id: &str,
        user_id: &str,
        is_liked: bool,
    ) -> Result<(), AppError>;

    /// Update the like flag of an existing (comment, user) row.
    async fn put_comment_like(
        &self,
        comment_id: &str,
        user_id: &str,
        is_liked: bool,
    ) -> Result<(), AppError>;

    /// Active like counts for the given comments.
    ///
    /// Comments without active likes are absent from the result.
    async fn get_comment_likes_by_comment_ids(
        &self,
        comment_ids: &[String],
    ) -> Result<Vec<CommentLikeCount>, AppError>;
}
