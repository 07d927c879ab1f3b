//! Comment Repository Implementation
//!
//! Comments are never removed; deletion sets `is_delete`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{CommentRepository, CommentRow, RegisterComment, RegisteredComment};
use crate::shared::error::AppError;
use crate::shared::snowflake::{prefix, SnowflakeGenerator};

/// PostgreSQL comment repository implementation.
pub struct PgCommentRepository {
    pool: PgPool,
    ids: Arc<SnowflakeGenerator>,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool, ids: Arc<SnowflakeGenerator>) -> Self {
        Self { pool, ids }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct InsertedCommentRecord {
    id: String,
    content: String,
    user_id: String,
}

/// Internal row type for comment listing.
#[derive(Debug, sqlx::FromRow)]
struct CommentRecord {
    id: String,
    username: String,
    content: String,
    is_delete: bool,
    created_at: DateTime<Utc>,
}

impl CommentRecord {
    fn into_row(self) -> CommentRow {
        CommentRow {
            id: self.id,
            username: self.username,
            content: self.content,
            is_delete: self.is_delete,
            created_at: self.created_at,
        }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn add_comment(&self, comment: &RegisterComment) -> Result<RegisteredComment, AppError> {
        let id = self.ids.next_id(prefix::COMMENT);

        let record = sqlx::query_as::<_, InsertedCommentRecord>(
            r#"
            INSERT INTO comments (id, content, thread_id, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, user_id
            "#,
        )
        .bind(&id)
        .bind(&comment.content)
        .bind(&comment.thread_id)
        .bind(&comment.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(RegisteredComment::new(record.user_id, record.id, record.content)?)
    }

    async fn verify_available_comment(&self, comment_id: &str) -> Result<(), AppError> {
        let found: Option<(String,)> = sqlx::query_as("SELECT id FROM comments WHERE id = $1")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await?;

        found.map(|_| ()).ok_or_else(AppError::comment_not_found)
    }

    async fn verify_comment_owner(&self, comment_id: &str, user_id: &str) -> Result<(), AppError> {
        let (owner,): (String,) = sqlx::query_as("SELECT user_id FROM comments WHERE id = $1")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(AppError::comment_not_found)?;

        if owner != user_id {
            return Err(AppError::not_owner());
        }

        Ok(())
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE comments SET is_delete = TRUE WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::comment_not_found());
        }

        Ok(())
    }

    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<CommentRow>, AppError> {
        let records = sqlx::query_as::<_, CommentRecord>(
            r#"
            SELECT c.id, u.username, c.content, c.is_delete, c.created_at
            FROM comments c
            INNER JOIN users u ON u.id = c.user_id
            WHERE c.thread_id = $1
            ORDER BY c.created_at ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(CommentRecord::into_row).collect())
    }
}
