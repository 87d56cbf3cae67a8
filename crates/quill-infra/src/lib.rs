//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! the SeaORM post repository, JWT session tokens and the hosted
//! identity provider client.

pub mod auth;
pub mod database;

pub use auth::{HostedAuthConfig, HostedIdentityProvider, JwtConfig, JwtTokenService};
pub use database::{DatabaseConfig, InMemoryPostRepository, PostgresPostRepository};
