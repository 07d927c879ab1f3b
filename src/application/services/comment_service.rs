//! Comment Service
//!
//! Handles commenting on threads, deleting comments and toggling likes.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    CommentLikePayload, CommentLikeRepository, CommentRepository, ContentPayload,
    RegisterComment, RegisteredComment, ThreadRepository,
};
use crate::shared::error::AppError;

/// Comment service trait
#[async_trait]
pub trait CommentService: Send + Sync {
    /// Comment on a thread
    async fn add_comment(
        &self,
        user_id: &str,
        thread_id: &str,
        payload: ContentPayload,
    ) -> Result<RegisteredComment, AppError>;

    /// Soft-delete a comment owned by `user_id`
    async fn delete_comment(
        &self,
        user_id: &str,
        thread_id: &str,
        comment_id: &str,
    ) -> Result<(), AppError>;

    /// Like a comment, or flip an existing like; returns the new like state
    async fn like_unlike_comment(
        &self,
        user_id: &str,
        thread_id: &str,
        comment_id: &str,
    ) -> Result<bool, AppError>;
}

/// CommentService implementation
pub struct CommentServiceImpl {
    thread_repo: Arc<dyn ThreadRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    like_repo: Arc<dyn CommentLikeRepository>,
}

impl CommentServiceImpl {
    pub fn new(
        thread_repo: Arc<dyn ThreadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        like_repo: Arc<dyn CommentLikeRepository>,
    ) -> Self {
        Self {
            thread_repo,
            comment_repo,
            like_repo,
        }
    }
}

#[async_trait]
impl CommentService for CommentServiceImpl {
    async fn add_comment(
        &self,
        user_id: &str,
        thread_id: &str,
        payload: ContentPayload,
    ) -> Result<RegisteredComment, AppError> {
        self.thread_repo.verify_available_thread(thread_id).await?;

        let comment = RegisterComment::new(user_id, thread_id, payload)?;
        let registered = self.comment_repo.add_comment(&comment).await?;

        tracing::info!(thread_id, comment_id = %registered.id, "Comment added");
        Ok(registered)
    }

    async fn delete_comment(
        &self,
        user_id: &str,
        thread_id: &str,
        comment_id: &str,
    ) -> Result<(), AppError> {
        self.thread_repo.verify_available_thread(thread_id).await?;
        self.comment_repo.verify_available_comment(comment_id).await?;
        self.comment_repo
            .verify_comment_owner(comment_id, user_id)
            .await?;
        self.comment_repo.delete_comment(comment_id).await?;

        tracing::info!(thread_id, comment_id, "Comment deleted");
        Ok(())
    }

    async fn like_unlike_comment(
        &self,
        user_id: &str,
        thread_id: &str,
        comment_id: &str,
    ) -> Result<bool, AppError> {
        let like = CommentLikePayload::new(thread_id, comment_id, user_id)?;

        self.thread_repo
            .verify_available_thread(&like.thread_id)
            .await?;
        self.comment_repo
            .verify_available_comment(&like.comment_id)
            .await?;

        let existing = self
            .like_repo
            .find_comment_like(&like.comment_id, &like.user_id)
            .await?;

        let is_liked = match existing {
            Some(row) => {
                let is_liked = !row.is_liked;
                self.like_repo
                    .put_comment_like(&like.comment_id, &like.user_id, is_liked)
                    .await?;
                is_liked
            }
            None => {
                self.like_repo
                    .add_comment_like(&like.comment_id, &like.user_id, true)
                    .await?;
                true
            }
        };

        tracing::debug!(comment_id, user_id, is_liked, "Comment like toggled");
        Ok(is_liked)
    }
}
