//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{EntityTrait, QuerySelect, Select};

use quill_core::domain::PostSummary;
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity, SummaryRow};
use super::postgres_base::{PostgresBaseRepository, repo_error};

/// PostgreSQL blog post repository.
pub type PostgresPostRepository = PostgresBaseRepository<BlogPostEntity>;

/// The listing query: every row, listed columns only, no ORDER BY.
pub fn summary_query() -> Select<BlogPostEntity> {
    BlogPostEntity::find().select_only().columns([
        blog_post::Column::Title,
        blog_post::Column::Content,
        blog_post::Column::ImageUrl,
        blog_post::Column::AuthorImage,
        blog_post::Column::AuthorName,
        blog_post::Column::Id,
        blog_post::Column::CreatedAt,
    ])
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_summaries(&self) -> Result<Vec<PostSummary>, RepoError> {
        let rows = summary_query()
            .into_model::<SummaryRow>()
            .all(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Listing blog posts failed");
                repo_error(e)
            })?;

        tracing::debug!(count = rows.len(), "Listed blog posts");
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn ping(&self) -> Result<(), RepoError> {
        self.db.ping().await.map_err(repo_error)
    }
}
