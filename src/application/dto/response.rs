//! Response DTOs
//!
//! Every successful response is wrapped in `{"status": "success", ...}`.

use serde::Serialize;

use crate::domain::{DetailedThread, RegisteredComment, RegisteredCommentReply, RegisteredThread};

/// Success envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Envelope without a `data` member, used by deletes and likes.
    pub fn ok() -> Self {
        Self {
            status: "success",
            data: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedThread {
    pub added_thread: RegisteredThread,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedComment {
    pub added_comment: RegisteredComment,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedReply {
    pub added_reply: RegisteredCommentReply,
}

#[derive(Debug, Serialize)]
pub struct ThreadData {
    pub thread: DetailedThread,
}
