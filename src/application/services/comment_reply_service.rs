//! Comment Reply Service

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    CommentReplyRepository, CommentRepository, ContentPayload, RegisterCommentReply,
    RegisteredCommentReply, ThreadRepository,
};
use crate::shared::error::AppError;

/// Comment reply service trait
#[async_trait]
pub trait CommentReplyService: Send + Sync {
    /// Reply to a comment of a thread
    async fn add_comment_reply(
        &self,
        user_id: &str,
        thread_id: &str,
        comment_id: &str,
        payload: ContentPayload,
    ) -> Result<RegisteredCommentReply, AppError>;

    /// Soft-delete a reply owned by `user_id`
    async fn delete_comment_reply(
        &self,
        user_id: &str,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
    ) -> Result<(), AppError>;
}

/// CommentReplyService implementation
pub struct CommentReplyServiceImpl {
    thread_repo: Arc<dyn ThreadRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reply_repo: Arc<dyn CommentReplyRepository>,
}

impl CommentReplyServiceImpl {
    pub fn new(
        thread_repo: Arc<dyn ThreadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        reply_repo: Arc<dyn CommentReplyRepository>,
    ) -> Self {
        Self {
            thread_repo,
            comment_repo,
            reply_repo,
        }
    }
}

#[async_trait]
impl CommentReplyService for CommentReplyServiceImpl {
    async fn add_comment_reply(
        &self,
        user_id: &str,
        thread_id: &str,
        comment_id: &str,
        payload: ContentPayload,
    ) -> Result<RegisteredCommentReply, AppError> {
        self.thread_repo.verify_available_thread(thread_id).await?;
        self.comment_repo.verify_available_comment(comment_id).await?;

        let reply = RegisterCommentReply::new(user_id, thread_id, comment_id, payload)?;
        let registered = self.reply_repo.add_comment_reply(&reply).await?;

        tracing::info!(comment_id, reply_id = %registered.id, "Comment reply added");
        Ok(registered)
    }

    async fn delete_comment_reply(
        &self,
        user_id: &str,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
    ) -> Result<(), AppError> {
        self.thread_repo.verify_available_thread(thread_id).await?;
        self.comment_repo.verify_available_comment(comment_id).await?;
        self.reply_repo
            .verify_available_comment_reply(reply_id)
            .await?;
        self.reply_repo
            .verify_comment_reply_owner(reply_id, user_id)
            .await?;
        self.reply_repo.delete_comment_reply(reply_id).await?;

        tracing::info!(comment_id, reply_id, "Comment reply deleted");
        Ok(())
    }
}
