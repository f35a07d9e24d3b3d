//! Blog post response types.

use folio_postgres::model;
use folio_postgres::types::PostStatus;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

/// Represents a blog post.
#[must_use]
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// ID of the post.
    pub post_id: Uuid,
    /// URL-safe unique identifier.
    pub slug: String,
    /// Post title.
    pub title: String,
    /// Short summary shown in listings.
    pub summary: String,
    /// Full post body.
    pub content: String,
    /// Lifecycle status.
    pub status: PostStatus,
    /// Timestamp of first publication, if ever published.
    pub published_at: Option<OffsetDateTime>,
    /// Timestamp when the post was created.
    pub created_at: OffsetDateTime,
    /// Timestamp when the post was last updated.
    pub updated_at: OffsetDateTime,
}

impl From<model::BlogPost> for BlogPost {
    fn from(post: model::BlogPost) -> Self {
        Self {
            post_id: post.id,
            slug: post.slug,
            title: post.title,
            summary: post.summary,
            content: post.content,
            status: post.status,
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Response for listing posts.
pub type BlogPosts = Vec<BlogPost>;
