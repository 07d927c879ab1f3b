//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod comment;
pub mod comment_reply;
pub mod health;
pub mod thread;
