//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgThreadRepository** - Threads (`threads` table)
//! - **PgCommentRepository** - Comments with soft deletion
//! - **PgCommentReplyRepository** - Replies to comments with soft deletion
//! - **PgCommentLikeRepository** - One like row per (comment, user)

pub mod comment_like_repository;
pub mod comment_reply_repository;
pub mod comment_repository;
pub mod thread_repository;


use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::{
    CommentLikeRepository, CommentReplyRepository, CommentRepository, ThreadRepository,
};
use crate::shared::snowflake::SnowflakeGenerator;

pub use comment_like_repository::PgCommentLikeRepository;
pub use comment_reply_repository::PgCommentReplyRepository;
pub use comment_repository::PgCommentRepository;
pub use thread_repository::PgThreadRepository;

/// The repository set handlers build services from.
#[derive(Clone)]
pub struct Repositories {
    pub threads: Arc<dyn ThreadRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub replies: Arc<dyn CommentReplyRepository>,
    pub likes: Arc<dyn CommentLikeRepository>,
}

impl Repositories {
    /// PostgreSQL-backed repositories sharing one pool and id generator.
    pub fn postgres(pool: PgPool, ids: Arc<SnowflakeGenerator>) -> Self {
        Self {
            threads: Arc::new(PgThreadRepository::new(pool.clone(), ids.clone())),
            comments: Arc::new(PgCommentRepository::new(pool.clone(), ids.clone())),
            replies: Arc::new(PgCommentReplyRepository::new(pool.clone(), ids.clone())),
            likes: Arc::new(PgCommentLikeRepository::new(pool, ids)),
        }
    }
}
