//! Blog post entity for SeaORM.

use sea_orm::{FromQueryResult, Set};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
    pub author_id: String,
    pub author_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub author_image: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

// Author fields are denormalized; there is no users table to relate to.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Row shape of the listing query.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct SummaryRow {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub author_image: Option<String>,
    pub author_name: String,
    pub id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

impl From<SummaryRow> for quill_core::domain::PostSummary {
    fn from(row: SummaryRow) -> Self {
        Self {
            title: row.title,
            content: row.content,
            image_url: row.image_url,
            author_image: row.author_image,
            author_name: row.author_name,
            id: row.id,
            created_at: row.created_at.into(),
        }
    }
}

impl From<Model> for quill_core::domain::BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            image_url: model.image_url,
            author_id: model.author_id,
            author_name: model.author_name,
            author_image: model.author_image,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<quill_core::domain::BlogPost> for ActiveModel {
    fn from(post: quill_core::domain::BlogPost) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            content: Set(post.content),
            image_url: Set(post.image_url),
            author_id: Set(post.author_id),
            author_name: Set(post.author_name),
            author_image: Set(post.author_image),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}
