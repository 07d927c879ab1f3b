//! Thread Repository Implementation

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{RegisterThread, RegisteredThread, ThreadRepository, ThreadRow};
use crate::shared::error::AppError;
use crate::shared::snowflake::{prefix, SnowflakeGenerator};

/// PostgreSQL thread repository implementation.
pub struct PgThreadRepository {
    pool: PgPool,
    ids: Arc<SnowflakeGenerator>,
}

impl PgThreadRepository {
    pub fn new(pool: PgPool, ids: Arc<SnowflakeGenerator>) -> Self {
        Self { pool, ids }
    }
}

/// Internal row type for the inserted thread.
#[derive(Debug, sqlx::FromRow)]
struct InsertedThreadRecord {
    id: String,
    title: String,
    user_id: String,
}

/// Internal row type for thread detail queries.
#[derive(Debug, sqlx::FromRow)]
struct ThreadRecord {
    id: String,
    title: String,
    body: String,
    username: String,
    created_at: DateTime<Utc>,
}

impl ThreadRecord {
    fn into_row(self) -> ThreadRow {
        ThreadRow {
            id: self.id,
            title: self.title,
            body: self.body,
            username: self.username,
            created_at: self.created_at,
        }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    async fn add_thread(&self, thread: &RegisterThread) -> Result<RegisteredThread, AppError> {
        let id = self.ids.next_id(prefix::THREAD);

        let record = sqlx::query_as::<_, InsertedThreadRecord>(
            r#"
            INSERT INTO threads (id, title, body, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, user_id
            "#,
        )
        .bind(&id)
        .bind(&thread.title)
        .bind(&thread.body)
        .bind(&thread.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(RegisteredThread::new(record.user_id, record.id, record.title)?)
    }

    async fn verify_available_thread(&self, thread_id: &str) -> Result<(), AppError> {
        let found: Option<(String,)> = sqlx::query_as("SELECT id FROM threads WHERE id = $1")
            .bind(thread_id)
            .fetch_optional(&self.pool)
            .await?;

        found.map(|_| ()).ok_or_else(AppError::thread_not_found)
    }

    async fn get_thread(&self, thread_id: &str) -> Result<ThreadRow, AppError> {
        let record = sqlx::query_as::<_, ThreadRecord>(
            r#"
            SELECT t.id, t.title, t.body, u.username, t.created_at
            FROM threads t
            INNER JOIN users u ON u.id = t.user_id
            WHERE t.id = $1
            "#,
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(AppError::thread_not_found)?;

        Ok(record.into_row())
    }
}
