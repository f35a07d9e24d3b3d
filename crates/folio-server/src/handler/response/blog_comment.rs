//! Blog comment response types.

use folio_postgres::model;
use folio_postgres::types::AvatarColor;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::service::CommentNode;

/// Represents a single blog comment.
#[must_use]
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogComment {
    /// ID of the comment.
    pub comment_id: Uuid,
    /// ID of the post the comment belongs to.
    pub post_id: Uuid,
    /// Parent comment ID for threaded replies.
    pub parent_comment_id: Option<Uuid>,
    /// Display name of the author.
    pub author_name: String,
    /// Derived initials shown in the avatar badge.
    pub author_initials: String,
    /// Avatar badge color.
    pub author_initials_color: AvatarColor,
    /// Comment text content.
    pub content: String,
    /// Nesting depth: 0 for root comments.
    pub depth: i32,
    /// Number of likes this comment has received.
    pub likes_count: i32,
    /// Moderation flag.
    pub is_approved: bool,
    /// Timestamp when the comment was created.
    pub created_at: OffsetDateTime,
}

impl From<model::BlogComment> for BlogComment {
    fn from(comment: model::BlogComment) -> Self {
        Self {
            comment_id: comment.id,
            post_id: comment.post_id,
            parent_comment_id: comment.parent_comment_id,
            author_name: comment.author_name,
            author_initials: comment.author_initials,
            author_initials_color: comment.author_initials_color,
            content: comment.content,
            depth: comment.depth,
            likes_count: comment.likes_count,
            is_approved: comment.is_approved,
            created_at: comment.created_at,
        }
    }
}

/// A comment with its nested replies.
#[must_use]
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogCommentNode {
    /// The comment itself.
    #[serde(flatten)]
    pub comment: BlogComment,
    /// Direct replies, oldest first.
    pub replies: Vec<BlogCommentNode>,
}

impl From<CommentNode> for BlogCommentNode {
    fn from(node: CommentNode) -> Self {
        Self {
            comment: node.comment.into(),
            replies: node.replies.into_iter().map(Into::into).collect(),
        }
    }
}

/// Response for listing the comment thread of a post.
#[must_use]
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogComments {
    /// Root comments with nested replies.
    pub comments: Vec<BlogCommentNode>,
}

impl From<Vec<CommentNode>> for BlogComments {
    fn from(nodes: Vec<CommentNode>) -> Self {
        Self {
            comments: nodes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Confirmation returned after deleting a comment.
#[must_use]
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDeleted {
    /// Human-readable confirmation message.
    pub message: String,
}
