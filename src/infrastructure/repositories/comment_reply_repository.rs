//! Comment Reply Repository Implementation

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{
    CommentReplyRepository, CommentReplyRow, RegisterCommentReply, RegisteredCommentReply,
};
use crate::shared::error::AppError;
use crate::shared::snowflake::{prefix, SnowflakeGenerator};

/// PostgreSQL comment reply repository implementation.
pub struct PgCommentReplyRepository {
    pool: PgPool,
    ids: Arc<SnowflakeGenerator>,
}

impl PgCommentReplyRepository {
    pub fn new(pool: PgPool, ids: Arc<SnowflakeGenerator>) -> Self {
        Self { pool, ids }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct InsertedReplyRecord {
    id: String,
    content: String,
    user_id: String,
}

#[derive(Debug, sqlx::FromRow)]
struct ReplyRecord {
    id: String,
    comment_id: String,
    username: String,
    content: String,
    is_delete: bool,
    created_at: DateTime<Utc>,
}

impl ReplyRecord {
    fn into_row(self) -> CommentReplyRow {
        CommentReplyRow {
            id: self.id,
            comment_id: self.comment_id,
            username: self.username,
            content: self.content,
            is_delete: self.is_delete,
            created_at: self.created_at,
        }
    }
}

#[async_trait]
impl CommentReplyRepository for PgCommentReplyRepository {
    async fn add_comment_reply(
        &self,
        reply: &RegisterCommentReply,
    ) -> Result<RegisteredCommentReply, AppError> {
        let id = self.ids.next_id(prefix::REPLY);

        let record = sqlx::query_as::<_, InsertedReplyRecord>(
            r#"
            INSERT INTO comment_replies (id, content, comment_id, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, user_id
            "#,
        )
        .bind(&id)
        .bind(&reply.content)
        .bind(&reply.comment_id)
        .bind(&reply.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(RegisteredCommentReply::new(record.user_id, record.id, record.content)?)
    }

    async fn verify_available_comment_reply(&self, reply_id: &str) -> Result<(), AppError> {
        let found: Option<(String,)> =
            sqlx::query_as("SELECT id FROM comment_replies WHERE id = $1")
                .bind(reply_id)
                .fetch_optional(&self.pool)
                .await?;

        found.map(|_| ()).ok_or_else(AppError::comment_reply_not_found)
    }

    async fn verify_comment_reply_owner(&self, reply_id: &str, user_id: &str) -> Result<(), AppError> {
        let (owner,): (String,) =
            sqlx::query_as("SELECT user_id FROM comment_replies WHERE id = $1")
                .bind(reply_id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(AppError::comment_reply_not_found)?;

        if owner != user_id {
            return Err(AppError::not_owner());
        }

        Ok(())
    }

    async fn delete_comment_reply(&self, reply_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE comment_replies SET is_delete = TRUE WHERE id = $1")
            .bind(reply_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::comment_reply_not_found());
        }

        Ok(())
    }

    async fn get_comment_replies_by_comment_ids(
        &self,
        comment_ids: &[String],
    ) -> Result<Vec<CommentReplyRow>, AppError> {
        if comment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let records = sqlx::query_as::<_, ReplyRecord>(
            r#"
            SELECT r.id, r.comment_id, u.username, r.content, r.is_delete, r.created_at
            FROM comment_replies r
            INNER JOIN users u ON u.id = r.user_id
            WHERE r.comment_id = ANY($1)
            ORDER BY r.created_at ASC
            "#,
        )
        .bind(comment_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(ReplyRecord::into_row).collect())
    }
}
