//! Database connection management and repositories.

mod connections;
mod memory;
mod postgres_base;
mod postgres_repo;

pub mod entity;

pub use connections::{DatabaseConfig, connect};
pub use memory::InMemoryPostRepository;
pub use postgres_base::PostgresBaseRepository;
pub use postgres_repo::{PostgresPostRepository, summary_query};
