//! Comment Like Repository Implementation
//!
//! One row per (comment, user); likes toggle `is_liked` in place.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{CommentLike, CommentLikeCount, CommentLikeRepository};
use crate::shared::error::AppError;
use crate::shared::snowflake::{prefix, SnowflakeGenerator};

/// PostgreSQL comment like repository implementation.
pub struct PgCommentLikeRepository {
    pool: PgPool,
    ids: Arc<SnowflakeGenerator>,
}

impl PgCommentLikeRepository {
    pub fn new(pool: PgPool, ids: Arc<SnowflakeGenerator>) -> Self {
        Self { pool, ids }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct LikeRecord {
    id: String,
    comment_id: String,
    user_id: String,
    is_liked: bool,
}

#[derive(Debug, sqlx::FromRow)]
struct LikeCountRecord {
    comment_id: String,
    count: i64,
}

#[async_trait]
impl CommentLikeRepository for PgCommentLikeRepository {
    async fn find_comment_like(
        &self,
        comment_id: &str,
        user_id: &str,
    ) -> Result<Option<CommentLike>, AppError> {
        let record = sqlx::query_as::<_, LikeRecord>(
            r#"
            SELECT id, comment_id, user_id, is_liked
            FROM comment_likes
            WHERE comment_id = $1 AND user_id = $2
            "#,
        )
        .bind(comment_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(|r| CommentLike {
            id: r.id,
            comment_id: r.comment_id,
            user_id: r.user_id,
            is_liked: r.is_liked,
        }))
    }

    async fn add_comment_like(
        &self,
        comment_id: &str,
        user_id: &str,
        is_liked: bool,
    ) -> Result<(), AppError> {
        let id = self.ids.next_id(prefix::COMMENT_LIKE);

        sqlx::query(
            r#"
            INSERT INTO comment_likes (id, comment_id, user_id, is_liked)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (comment_id, user_id) DO UPDATE SET is_liked = EXCLUDED.is_liked
            "#,
        )
        .bind(&id)
        .bind(comment_id)
        .bind(user_id)
        .bind(is_liked)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn put_comment_like(
        &self,
        comment_id: &str,
        user_id: &str,
        is_liked: bool,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE comment_likes SET is_liked = $3 WHERE comment_id = $1 AND user_id = $2")
            .bind(comment_id)
            .bind(user_id)
            .bind(is_liked)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn get_comment_likes_by_comment_ids(
        &self,
        comment_ids: &[String],
    ) -> Result<Vec<CommentLikeCount>, AppError> {
        if comment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let records = sqlx::query_as::<_, LikeCountRecord>(
            r#"
            SELECT comment_id, COUNT(DISTINCT user_id) AS count
            FROM comment_likes
            WHERE comment_id = ANY($1) AND is_liked = TRUE
            GROUP BY comment_id
            "#,
        )
        .bind(comment_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(records
            .into_iter()
            .map(|r| CommentLikeCount {
                comment_id: r.comment_id,
                count: r.count,
            })
            .collect())
    }
}
