//! # Domain Layer
//!
//! The domain layer contains the core business logic of the forum.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Threads, comments, replies, likes and their repository traits
//! - **value_objects**: Immutable value types (soft-delete presentation)
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Entities validate on construction and fail closed

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
