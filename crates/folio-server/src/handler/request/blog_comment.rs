//! Blog comment request types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for submitting a new blog comment.
#[must_use]
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "authorName": "Jane Doe",
    "authorEmail": "jane@example.com",
    "content": "Great writeup! Did you consider using a trigger for the counter?",
    "parentCommentId": null
}))]
pub struct CreateBlogComment {
    /// Display name of the comment author.
    #[validate(length(min = 1, max = 80))]
    pub author_name: String,
    /// Optional contact email; never shown on the public site.
    #[validate(email)]
    #[serde(default)]
    pub author_email: Option<String>,
    /// Comment text content.
    #[validate(length(min = 1, max = 5000))]
    pub content: String,
    /// Parent comment ID for threaded replies.
    #[serde(default)]
    pub parent_comment_id: Option<Uuid>,
}
