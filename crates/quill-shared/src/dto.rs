//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_core::domain::{NewBlogPost, PostSummary, SessionUser};

/// Form body submitted by the new-post page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePostForm {
    pub title: String,
    pub content: String,
    pub image_url: String,
}

impl From<CreatePostForm> for NewBlogPost {
    fn from(form: CreatePostForm) -> Self {
        Self {
            title: form.title,
            content: form.content,
            image_url: Some(form.image_url),
        }
    }
}

/// One entry of `GET /api/posts`, camelCased for browser clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummaryResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
    pub author_name: String,
    pub author_image: Option<String>,
    pub create_at: DateTime<Utc>,
}

impl From<PostSummary> for PostSummaryResponse {
    fn from(summary: PostSummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            content: summary.content,
            image_url: summary.image_url,
            author_name: summary.author_name,
            author_image: summary.author_image,
            create_at: summary.created_at,
        }
    }
}

/// Response of `GET /api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUserResponse {
    pub id: String,
    pub given_name: String,
    pub family_name: Option<String>,
    pub email: String,
    pub picture: Option<String>,
}

impl From<SessionUser> for SessionUserResponse {
    fn from(user: SessionUser) -> Self {
        Self {
            id: user.id,
            given_name: user.given_name,
            family_name: user.family_name,
            email: user.email,
            picture: user.picture,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_summary_response_field_names() {
        let summary = PostSummary {
            title: "xfb".to_string(),
            content: "dfb".to_string(),
            image_url: None,
            author_image: None,
            author_name: "Ayoub".to_string(),
            id: Uuid::new_v4(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(PostSummaryResponse::from(summary)).unwrap();
        let object = json.as_object().unwrap();

        for key in [
            "id",
            "title",
            "content",
            "imageURL",
            "authorName",
            "authorImage",
            "createAt",
        ] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert_eq!(object.len(), 7);
    }
}
