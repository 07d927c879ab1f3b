//! Validation Utilities
//!
//! Typed validation failures raised by entity constructors, and their
//! translation into client-facing messages.

use validator::ValidationErrors;

use super::error::AppError;

/// What went wrong with a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// A required property is absent, null or empty.
    MissingProperty,
    /// A property is present but has the wrong data type.
    InvalidType,
    /// A property exceeds its length limit.
    LimitExceeded,
}

impl ValidationKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingProperty => "NOT_CONTAIN_NEEDED_PROPERTY",
            Self::InvalidType => "NOT_MEET_DATA_TYPE_SPECIFICATION",
            Self::LimitExceeded => "LIMIT_EXCEEDED",
        }
    }
}

/// The entity whose construction failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    RegisterThread,
    RegisteredThread,
    ThreadQuery,
    DetailedThread,
    RegisterComment,
    RegisteredComment,
    CommentsData,
    RegisterCommentReply,
    RegisteredCommentReply,
    CommentRepliesData,
    CommentLike,
}

impl Entity {
    pub fn code(&self) -> &'static str {
        match self {
            Self::RegisterThread => "REGISTER_THREAD",
            Self::RegisteredThread => "REGISTERED_THREAD",
            Self::ThreadQuery => "THREAD_QUERY",
            Self::DetailedThread => "DETAILED_THREAD",
            Self::RegisterComment => "REGISTER_COMMENT",
            Self::RegisteredComment => "REGISTERED_COMMENT",
            Self::CommentsData => "COMMENTS_DATA",
            Self::RegisterCommentReply => "REGISTER_COMMENT_REPLY",
            Self::RegisteredCommentReply => "REGISTERED_COMMENT_REPLY",
            Self::CommentRepliesData => "COMMENT_REPLIES_DATA",
            Self::CommentLike => "COMMENT_LIKE",
        }
    }

    /// The user action an entity backs, for entities built from request input.
    ///
    /// Entities built from stored rows return `None`: a failure there is a
    /// server fault, not a bad request.
    fn action(&self) -> Option<&'static str> {
        match self {
            Self::RegisterThread => Some("membuat thread baru"),
            Self::ThreadQuery => Some("mendapatkan thread"),
            Self::RegisterComment => Some("membuat comment baru"),
            Self::RegisterCommentReply => Some("membuat balasan komentar baru"),
            Self::CommentLike => Some("menyukai komentar"),
            _ => None,
        }
    }
}

/// A payload failed entity validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}.{}", .entity.code(), .kind.code())]
pub struct ValidationError {
    pub kind: ValidationKind,
    pub entity: Entity,
}

impl ValidationError {
    pub fn new(kind: ValidationKind, entity: Entity) -> Self {
        Self { kind, entity }
    }

    pub fn missing(entity: Entity) -> Self {
        Self::new(ValidationKind::MissingProperty, entity)
    }

    pub fn invalid_type(entity: Entity) -> Self {
        Self::new(ValidationKind::InvalidType, entity)
    }

    pub fn limit_exceeded(entity: Entity) -> Self {
        Self::new(ValidationKind::LimitExceeded, entity)
    }

    /// Whether this failure was caused by client input.
    pub fn is_client_error(&self) -> bool {
        self.entity.action().is_some()
    }

    /// Message shown to API clients.
    pub fn user_message(&self) -> String {
        let Some(action) = self.entity.action() else {
            return self.to_string();
        };

        let reason = match (self.entity, self.kind) {
            (_, ValidationKind::MissingProperty) => "properti yang dibutuhkan tidak lengkap",
            (_, ValidationKind::InvalidType) => "tipe data tidak sesuai",
            (Entity::RegisterThread, ValidationKind::LimitExceeded) => {
                "karakter title melebihi batas limit"
            }
            (_, ValidationKind::LimitExceeded) => "karakter melebihi batas limit",
        };

        format!("tidak dapat {} karena {}", action, reason)
    }
}

/// Convert `validator` errors raised while building `entity` into a
/// length-limit failure.
pub fn limit_error(entity: Entity, errors: ValidationErrors) -> ValidationError {
    for (field, errs) in errors.field_errors() {
        for e in errs {
            tracing::debug!(entity = entity.code(), field = %field, code = %e.code, "payload rejected");
        }
    }

    ValidationError::limit_exceeded(entity)
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        if err.is_client_error() {
            AppError::Validation(err)
        } else {
            AppError::Internal(err.to_string())
        }
    }
}
