//! # Value Objects
//!
//! Small immutable types shared by the forum entities.

mod content;

pub use content::{ContentKind, Presentable, DELETED_COMMENT, DELETED_REPLY};
