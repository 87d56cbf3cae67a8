//! # Quill Shared
//!
//! Wire types for the JSON endpoints and RFC 7807 problem documents.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
