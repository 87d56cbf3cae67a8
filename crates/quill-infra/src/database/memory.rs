//! In-memory post repository, used by tests and local demos.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{BlogPost, PostSummary};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository};

/// Post repository backed by a `Vec`, keeping insertion order.
///
/// Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: Vec<BlogPost>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, entity: BlogPost) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;
        if posts.iter().any(|p| p.id == entity.id) {
            return Err(RepoError::Constraint(format!(
                "duplicate key: post {}",
                entity.id
            )));
        }
        posts.push(entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);

        if posts.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_summaries(&self) -> Result<Vec<PostSummary>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().cloned().map(PostSummary::from).collect())
    }

    async fn ping(&self) -> Result<(), RepoError> {
        Ok(())
    }
}
