//! # Domain Entities
//!
//! Core domain entities of the forum. Request entities (`Register*`)
//! validate client payloads; acknowledgement entities (`Registered*`) shape
//! creation responses; aggregation entities (`CommentRepliesData`,
//! `CommentsData`, `DetailedThread`) turn stored rows into the nested
//! thread view.
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod comment;
mod comment_like;
mod comment_reply;
mod payload;
mod thread;

pub use thread::{
    DetailedThread, RegisterThread, RegisteredThread, ThreadRepository, ThreadRow,
    MAX_TITLE_LENGTH,
};

pub use comment::{
    CommentRepository, CommentRow, CommentView, CommentsData, RegisterComment, RegisteredComment,
};

pub use comment_reply::{
    CommentRepliesData, CommentReplyRepository, CommentReplyRow, CommentReplyView,
    RegisterCommentReply, RegisteredCommentReply,
};

pub use comment_like::{CommentLike, CommentLikeCount, CommentLikePayload, CommentLikeRepository};

pub use payload::{ContentPayload, ThreadPayload};

#[cfg(test)]
pub use comment::MockCommentRepository;
#[cfg(test)]
pub use comment_like::MockCommentLikeRepository;
#[cfg(test)]
pub use comment_reply::MockCommentReplyRepository;
#[cfg(test)]
pub use thread::MockThreadRepository;
