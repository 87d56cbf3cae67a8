use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, PostSummary};
use crate::error::RepoError;

/// Generic repository trait defining standard persistence operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity and return it as stored.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Blog post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<BlogPost, Uuid> {
    /// All posts in store order, projected to [`PostSummary`].
    ///
    /// No filter, sort or pagination is applied, so the order is whatever
    /// the store yields and may differ between calls.
    async fn list_summaries(&self) -> Result<Vec<PostSummary>, RepoError>;

    /// Round-trip to the store without touching any table.
    async fn ping(&self) -> Result<(), RepoError>;
}
