//! Thread entities and repository trait.
//!
//! Maps to the `threads` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;

use super::comment::{CommentView, CommentsData};
use super::payload::{require_present, require_strings, ThreadPayload};
use crate::shared::error::AppError;
use crate::shared::validation::{limit_error, Entity, ValidationError};

/// Maximum thread title length, in characters.
pub const MAX_TITLE_LENGTH: usize = 150;

/// A validated request to create a thread.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct RegisterThread {
    /// Owner user ID
    pub user_id: String,

    /// Thread title (up to 150 characters)
    #[validate(length(max = 150))]
    pub title: String,

    /// Thread body
    pub body: String,
}

impl RegisterThread {
    pub fn new(user_id: &str, payload: ThreadPayload) -> Result<Self, ValidationError> {
        let entity = Entity::RegisterThread;
        require_present(entity, &[user_id])?;
        let [title, body] = require_strings(entity, [payload.title.as_ref(), payload.body.as_ref()])?;

        let thread = Self {
            user_id: user_id.to_string(),
            title,
            body,
        };
        thread.validate().map_err(|e| limit_error(entity, e))?;

        Ok(thread)
    }
}

/// A thread as acknowledged after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl RegisteredThread {
    pub fn new(owner: String, id: String, title: String) -> Result<Self, ValidationError> {
        require_present(Entity::RegisteredThread, &[&owner, &id, &title])?;
        Ok(Self { id, title, owner })
    }
}

/// A thread row joined with its author's username.
///
/// Maps to the `threads` table:
/// - id: VARCHAR(50) PRIMARY KEY
/// - title: VARCHAR(150) NOT NULL
/// - body: TEXT NOT NULL
/// - user_id: VARCHAR(50) NOT NULL REFERENCES users(id)
/// - is_delete: BOOLEAN NOT NULL DEFAULT FALSE
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRow {
    pub id: String,
    pub title: String,
    pub body: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// The fully aggregated thread view returned by `GET /threads/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedThread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentView>,
}

impl DetailedThread {
    pub fn new(thread: ThreadRow, comments: CommentsData) -> Result<Self, ValidationError> {
        require_present(
            Entity::DetailedThread,
            &[&thread.id, &thread.title, &thread.body, &thread.username],
        )?;

        Ok(Self {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.created_at,
            username: thread.username,
            comments: comments.into_comments(),
        })
    }
}

/// Repository trait for Thread data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Persist a new thread.
    async fn add_thread(&self, thread: &RegisterThread) -> Result<RegisteredThread, AppError>;

    /// Fail with `NotFound` unless the thread exists.
    async fn verify_available_thread(&self, thread_id: &str) -> Result<(), AppError>;

    /// Fetch a thread together with its author's username.
    async fn get_thread(&self, thread_id: &str) -> Result<ThreadRow, AppError>;
}
