use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SessionUser;
use crate::error::DomainError;

const MAX_TITLE_CHARS: usize = 200;

/// Blog post entity.
///
/// Author attributes are copied from the session at creation time and are
/// not linked to any user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub author_id: String,
    pub author_name: String,
    pub author_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Create a post authored by `author` from an already validated draft.
    pub fn new(draft: NewBlogPost, author: &SessionUser) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            content: draft.content,
            image_url: draft.image_url,
            author_id: author.id.clone(),
            author_name: author.display_name(),
            author_image: author.picture.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_authored_by(&self, user: &SessionUser) -> bool {
        self.author_id == user.id
    }
}

/// The listing projection of a post.
///
/// Carries exactly the listed fields; `author_id` and `updated_at` never
/// leave the store through this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub author_image: Option<String>,
    pub author_name: String,
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<BlogPost> for PostSummary {
    fn from(post: BlogPost) -> Self {
        Self {
            title: post.title,
            content: post.content,
            image_url: post.image_url,
            author_image: post.author_image,
            author_name: post.author_name,
            id: post.id,
            created_at: post.created_at,
        }
    }
}

/// User-submitted fields of a new post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewBlogPost {
    /// Trim the draft and check it, returning the cleaned draft.
    pub fn validate(self) -> Result<Self, DomainError> {
        let title = self.title.trim().to_string();
        let content = self.content.trim().to_string();
        let image_url = self
            .image_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        if title.is_empty() {
            return Err(DomainError::Validation("Title is required".to_string()));
        }
        if title.chars().count() > MAX_TITLE_CHARS {
            return Err(DomainError::Validation(format!(
                "Title must be at most {MAX_TITLE_CHARS} characters"
            )));
        }
        if content.is_empty() {
            return Err(DomainError::Validation("Content is required".to_string()));
        }
        if let Some(url) = &image_url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(DomainError::Validation(
                    "Image URL must start with http:// or https://".to_string(),
                ));
            }
        }

        Ok(Self {
            title,
            content,
            image_url,
        })
    }
}
