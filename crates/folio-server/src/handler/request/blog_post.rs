//! Blog post request types.

use folio_postgres::types::PostStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a new blog post.
#[must_use]
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "slug": "building-a-comment-tree",
    "title": "Building a Comment Tree",
    "summary": "Reconstructing threads from flat rows",
    "content": "Full post body...",
    "publish": true
}))]
pub struct CreateBlogPost {
    /// URL-safe unique identifier for the post.
    #[validate(length(min = 1, max = 120))]
    pub slug: String,
    /// Post title.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Short summary shown in listings.
    #[serde(default)]
    #[validate(length(max = 500))]
    pub summary: Option<String>,
    /// Full post body.
    #[serde(default)]
    pub content: Option<String>,
    /// Whether to publish immediately instead of saving as a draft.
    #[serde(default)]
    pub publish: bool,
}

/// Request payload for updating an existing blog post.
#[must_use]
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPost {
    /// Updated post title.
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    /// Updated summary.
    #[serde(default)]
    #[validate(length(max = 500))]
    pub summary: Option<String>,
    /// Updated post body.
    #[serde(default)]
    pub content: Option<String>,
    /// Updated lifecycle status.
    #[serde(default)]
    pub status: Option<PostStatus>,
}
