//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **ThreadService**: Thread creation and the detailed thread view
//! - **CommentService**: Comments, soft deletion and like toggling
//! - **CommentReplyService**: Replies to comments and their soft deletion

pub mod comment_reply_service;
pub mod comment_service;
pub mod thread_service;

pub use comment_reply_service::{CommentReplyService, CommentReplyServiceImpl};
pub use comment_service::{CommentService, CommentServiceImpl};
pub use thread_service::{ThreadService, ThreadServiceImpl};
