//! Comment reply entities and repository trait.
//!
//! Maps to the `comment_replies` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::payload::{require_present, require_strings, ContentPayload};
use crate::domain::value_objects::{ContentKind, Presentable};
use crate::shared::error::AppError;
use crate::shared::validation::{Entity, ValidationError};

/// A validated request to reply to a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterCommentReply {
    pub user_id: String,
    pub thread_id: String,
    pub comment_id: String,
    pub content: String,
}

impl RegisterCommentReply {
    pub fn new(
        user_id: &str,
        thread_id: &str,
        comment_id: &str,
        payload: ContentPayload,
    ) -> Result<Self, ValidationError> {
        let entity = Entity::RegisterCommentReply;
        require_present(entity, &[user_id, thread_id, comment_id])?;
        let [content] = require_strings(entity, [payload.content.as_ref()])?;

        Ok(Self {
            user_id: user_id.to_string(),
            thread_id: thread_id.to_string(),
            comment_id: comment_id.to_string(),
            content,
        })
    }
}

/// A reply as acknowledged after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredCommentReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl RegisteredCommentReply {
    pub fn new(owner: String, id: String, content: String) -> Result<Self, ValidationError> {
        require_present(Entity::RegisteredCommentReply, &[&owner, &id, &content])?;
        Ok(Self { id, content, owner })
    }
}

/// A reply row joined with its author's username.
///
/// Maps to the `comment_replies` table:
/// - id: VARCHAR(50) PRIMARY KEY
/// - content: TEXT NOT NULL
/// - comment_id: VARCHAR(50) NOT NULL REFERENCES comments(id)
/// - user_id: VARCHAR(50) NOT NULL REFERENCES users(id)
/// - is_delete: BOOLEAN NOT NULL DEFAULT FALSE
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentReplyRow {
    pub id: String,
    pub comment_id: String,
    pub username: String,
    pub content: String,
    pub is_delete: bool,
    pub created_at: DateTime<Utc>,
}

impl Presentable for CommentReplyRow {
    const KIND: ContentKind = ContentKind::Reply;

    fn raw_content(&self) -> &str {
        &self.content
    }

    fn is_deleted(&self) -> bool {
        self.is_delete
    }
}

/// A reply as presented under its comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentReplyView {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
}

/// Presentable replies, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentRepliesData {
    replies: Vec<CommentReplyView>,
}

impl CommentRepliesData {
    pub fn new(rows: Vec<CommentReplyRow>) -> Result<Self, ValidationError> {
        Self::validate(&rows)?;

        let replies = rows
            .into_iter()
            .map(|r| CommentReplyView {
                content: r.presentable_content(),
                id: r.id,
                username: r.username,
                date: r.created_at,
            })
            .collect();

        Ok(Self { replies })
    }

    /// Check that every row carries its identifying fields.
    pub fn validate(rows: &[CommentReplyRow]) -> Result<(), ValidationError> {
        rows.iter().try_for_each(|r| {
            require_present(Entity::CommentRepliesData, &[&r.id, &r.comment_id, &r.username])
        })
    }

    pub fn replies(&self) -> &[CommentReplyView] {
        &self.replies
    }

    pub fn into_replies(self) -> Vec<CommentReplyView> {
        self.replies
    }
}

/// Repository trait for CommentReply data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentReplyRepository: Send + Sync {
    /// Persist a new reply.
    async fn add_comment_reply(
        &self,
        reply: &RegisterCommentReply,
    ) -> Result<RegisteredCommentReply, AppError>;

    /// Fail with `NotFound` unless the reply exists.
    async fn verify_available_comment_reply(&self, reply_id: &str) -> Result<(), AppError>;

    /// Fail with `Forbidden` unless `user_id` owns the reply.
    async fn verify_comment_reply_owner(&self, reply_id: &str, user_id: &str) -> Result<(), AppError>;

    /// Soft-delete a reply.
    async fn delete_comment_reply(&self, reply_id: &str) -> Result<(), AppError>;

    /// All replies of the given comments, oldest first.
    async fn get_comment_replies_by_comment_ids(
        &self,
        comment_ids: &[String],
    ) -> Result<Vec<CommentReplyRow>, AppError>;
}
