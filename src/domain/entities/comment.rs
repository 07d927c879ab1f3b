//! Comment entities and repository trait.
//!
//! Maps to the `comments` table in the database schema.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::comment_like::CommentLikeCount;
use super::comment_reply::{CommentRepliesData, CommentReplyRow, CommentReplyView};
use super::payload::{require_present, require_strings, ContentPayload};
use crate::domain::value_objects::{ContentKind, Presentable};
use crate::shared::error::AppError;
use crate::shared::validation::{Entity, ValidationError};

/// A validated request to comment on a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterComment {
    pub user_id: String,
    pub thread_id: String,
    pub content: String,
}

impl RegisterComment {
    pub fn new(
        user_id: &str,
        thread_id: &str,
        payload: ContentPayload,
    ) -> Result<Self, ValidationError> {
        let entity = Entity::RegisterComment;
        require_present(entity, &[user_id, thread_id])?;
        let [content] = require_strings(entity, [payload.content.as_ref()])?;

        Ok(Self {
            user_id: user_id.to_string(),
            thread_id: thread_id.to_string(),
            content,
        })
    }
}

/// A comment as acknowledged after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl RegisteredComment {
    pub fn new(owner: String, id: String, content: String) -> Result<Self, ValidationError> {
        require_present(Entity::RegisteredComment, &[&owner, &id, &content])?;
        Ok(Self { id, content, owner })
    }
}

/// A comment row joined with its author's username.
///
/// Maps to the `comments` table:
/// - id: VARCHAR(50) PRIMARY KEY
/// - content: TEXT NOT NULL
/// - thread_id: VARCHAR(50) NOT NULL REFERENCES threads(id)
/// - user_id: VARCHAR(50) NOT NULL REFERENCES users(id)
/// - is_delete: BOOLEAN NOT NULL DEFAULT FALSE
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRow {
    pub id: String,
    pub username: String,
    pub content: String,
    pub is_delete: bool,
    pub created_at: DateTime<Utc>,
}

impl Presentable for CommentRow {
    const KIND: ContentKind = ContentKind::Comment;

    fn raw_content(&self) -> &str {
        &self.content
    }

    fn is_deleted(&self) -> bool {
        self.is_delete
    }
}

/// A comment as presented inside a detailed thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub like_count: i64,
    pub replies: Vec<CommentReplyView>,
}

/// Comments of a thread with their replies and like counts attached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentsData {
    comments: Vec<CommentView>,
}

impl CommentsData {
    /// Aggregate comment, reply and like rows.
    ///
    /// Comment order follows `comments`; replies keep their input order
    /// within each comment. Like rows for unknown comments are ignored and
    /// comments without a like row get a count of zero.
    pub fn new(
        comments: Vec<CommentRow>,
        replies: Vec<CommentReplyRow>,
        likes: Vec<CommentLikeCount>,
    ) -> Result<Self, ValidationError> {
        let entity = Entity::CommentsData;

        for c in &comments {
            require_present(entity, &[&c.id, &c.username])?;
        }
        CommentRepliesData::validate(&replies)?;
        for like in &likes {
            require_present(entity, &[&like.comment_id])?;
            if like.count < 0 {
                return Err(ValidationError::invalid_type(entity));
            }
        }

        let like_counts: HashMap<&str, i64> = likes
            .iter()
            .map(|l| (l.comment_id.as_str(), l.count))
            .collect();

        let mut replies_by_comment: HashMap<String, Vec<CommentReplyRow>> = HashMap::new();
        for reply in replies {
            replies_by_comment
                .entry(reply.comment_id.clone())
                .or_default()
                .push(reply);
        }

        let mut views = Vec::with_capacity(comments.len());
        for comment in comments {
            let replies = replies_by_comment.remove(&comment.id).unwrap_or_default();
            let replies = CommentRepliesData::new(replies)?.into_replies();

            views.push(CommentView {
                like_count: like_counts.get(comment.id.as_str()).copied().unwrap_or(0),
                content: comment.presentable_content(),
                id: comment.id,
                username: comment.username,
                date: comment.created_at,
                replies,
            });
        }

        Ok(Self { comments: views })
    }

    pub fn comments(&self) -> &[CommentView] {
        &self.comments
    }

    pub fn into_comments(self) -> Vec<CommentView> {
        self.comments
    }
}

/// Repository trait for Comment data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment.
    async fn add_comment(&self, comment: &RegisterComment) -> Result<RegisteredComment, AppError>;

    /// Fail with `NotFound` unless the comment exists.
    async fn verify_available_comment(&self, comment_id: &str) -> Result<(), AppError>;

    /// Fail with `Forbidden` unless `user_id` owns the comment.
    async fn verify_comment_owner(&self, comment_id: &str, user_id: &str) -> Result<(), AppError>;

    /// Soft-delete a comment.
    async fn delete_comment(&self, comment_id: &str) -> Result<(), AppError>;

    /// All comments of a thread, oldest first.
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<CommentRow>, AppError>;
}
