//! Thread Service
//!
//! Handles thread creation and the detailed thread view.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    CommentLikeRepository, CommentReplyRepository, CommentRepository, CommentsData,
    DetailedThread, RegisterThread, RegisteredThread, ThreadPayload, ThreadRepository,
};
use crate::shared::error::AppError;
use crate::shared::validation::{Entity, ValidationError};

/// Thread service trait
#[async_trait]
pub trait ThreadService: Send + Sync {
    /// Create a thread owned by `user_id`
    async fn add_thread(
        &self,
        user_id: &str,
        payload: ThreadPayload,
    ) -> Result<RegisteredThread, AppError>;

    /// Get a thread with its comments, replies and like counts
    async fn get_thread(&self, thread_id: &str) -> Result<DetailedThread, AppError>;
}

/// ThreadService implementation
pub struct ThreadServiceImpl {
    thread_repo: Arc<dyn ThreadRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reply_repo: Arc<dyn CommentReplyRepository>,
    like_repo: Arc<dyn CommentLikeRepository>,
}

impl ThreadServiceImpl {
    pub fn new(
        thread_repo: Arc<dyn ThreadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        reply_repo: Arc<dyn CommentReplyRepository>,
        like_repo: Arc<dyn CommentLikeRepository>,
    ) -> Self {
        Self {
            thread_repo,
            comment_repo,
            reply_repo,
            like_repo,
        }
    }
}

#[async_trait]
impl ThreadService for ThreadServiceImpl {
    async fn add_thread(
        &self,
        user_id: &str,
        payload: ThreadPayload,
    ) -> Result<RegisteredThread, AppError> {
        let thread = RegisterThread::new(user_id, payload)?;
        let registered = self.thread_repo.add_thread(&thread).await?;

        tracing::info!(thread_id = %registered.id, owner = %registered.owner, "Thread created");
        Ok(registered)
    }

    async fn get_thread(&self, thread_id: &str) -> Result<DetailedThread, AppError> {
        if thread_id.is_empty() {
            return Err(ValidationError::missing(Entity::ThreadQuery).into());
        }

        self.thread_repo.verify_available_thread(thread_id).await?;
        let thread = self.thread_repo.get_thread(thread_id).await?;

        let comments = self.comment_repo.get_comments_by_thread_id(thread_id).await?;
        let comment_ids: Vec<String> = comments.iter().map(|c| c.id.clone()).collect();

        let likes = self
            .like_repo
            .get_comment_likes_by_comment_ids(&comment_ids)
            .await?;
        let replies = self
            .reply_repo
            .get_comment_replies_by_comment_ids(&comment_ids)
            .await?;

        tracing::debug!(
            thread_id,
            comments = comments.len(),
            replies = replies.len(),
            "Assembling detailed thread"
        );

        let comments = CommentsData::new(comments, replies, likes)?;
        Ok(DetailedThread::new(thread, comments)?)
    }
}
