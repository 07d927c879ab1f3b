//! Soft-delete presentation of user content.
//!
//! Deleted comments and replies keep their row; the text shown to readers is
//! replaced with a fixed placeholder.

/// Placeholder shown in place of a deleted comment.
pub const DELETED_COMMENT: &str = "**komentar telah dihapus**";

/// Placeholder shown in place of a deleted reply.
pub const DELETED_REPLY: &str = "**balasan telah dihapus**";

/// Kinds of soft-deletable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Comment,
    Reply,
}

impl ContentKind {
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Comment => DELETED_COMMENT,
            Self::Reply => DELETED_REPLY,
        }
    }
}

/// A stored row whose content may be soft-deleted.
pub trait Presentable {
    const KIND: ContentKind;

    fn raw_content(&self) -> &str;

    fn is_deleted(&self) -> bool;

    /// Content as it may be shown to readers.
    fn presentable_content(&self) -> String {
        if self.is_deleted() {
            Self::KIND.placeholder().to_string()
        } else {
            self.raw_content().to_string()
        }
    }
}
