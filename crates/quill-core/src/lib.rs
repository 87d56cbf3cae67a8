//! # Quill Core
//!
//! The domain layer of the Quill blog.
//! Posts, sessions and the view rules that depend on them, with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
