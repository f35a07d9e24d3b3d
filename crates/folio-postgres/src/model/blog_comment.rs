//! Blog comment model for PostgreSQL database operations.

use diesel::prelude::*;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::schema::blog_comments;
use crate::types::AvatarColor;

/// Blog comment model representing reader discussions below a post.
///
/// Comments form a thread: `parent_comment_id` points at another comment on
/// the same post, and `depth` is stored redundantly as `parent.depth + 1`
/// (0 for root comments) so reads never have to walk the parent chain.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = blog_comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BlogComment {
    /// Unique comment identifier.
    pub id: Uuid,
    /// Reference to the post this comment belongs to.
    pub post_id: Uuid,
    /// Parent comment for threaded replies (NULL for root comments).
    pub parent_comment_id: Option<Uuid>,
    /// Display name supplied by the submitter.
    pub author_name: String,
    /// Optional contact email supplied by the submitter.
    pub author_email: Option<String>,
    /// Comment text content (lightweight markup, rendered downstream).
    pub content: String,
    /// Derived initials shown in the avatar badge.
    pub author_initials: String,
    /// Avatar badge color, fixed at creation time.
    pub author_initials_color: AvatarColor,
    /// Nesting depth: 0 for root comments, `parent.depth + 1` otherwise.
    pub depth: i32,
    /// Number of likes this comment has received.
    pub likes_count: i32,
    /// Moderation flag; comments are auto-approved on creation.
    pub is_approved: bool,
    /// Timestamp when the comment was created. The sole sort key for
    /// both flat listing and tree assembly.
    pub created_at: OffsetDateTime,
}

/// Data for creating a new blog comment.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = blog_comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewBlogComment {
    /// Post ID.
    pub post_id: Uuid,
    /// Parent comment ID for replies.
    pub parent_comment_id: Option<Uuid>,
    /// Submitter display name.
    pub author_name: String,
    /// Submitter email.
    pub author_email: Option<String>,
    /// Comment content.
    pub content: String,
    /// Derived author initials.
    pub author_initials: String,
    /// Chosen avatar color.
    pub author_initials_color: Option<AvatarColor>,
    /// Nesting depth.
    pub depth: i32,
    /// Moderation flag.
    pub is_approved: bool,
}

impl BlogComment {
    /// Returns whether this is a root comment (not a reply).
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent_comment_id.is_none()
    }

    /// Returns whether this is a reply to another comment.
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_comment_id.is_some()
    }
}

impl NewBlogComment {
    /// Creates a new root comment on a post.
    ///
    /// Replies are built from this with [`NewBlogComment::reply_to`], which
    /// keeps the depth consistent with the parent comment.
    pub fn for_post(post_id: Uuid, author_name: String, content: String) -> Self {
        Self {
            post_id,
            author_name,
            content,
            is_approved: true,
            ..Default::default()
        }
    }

    /// Sets the parent comment, deriving this comment's depth from it.
    pub fn reply_to(mut self, parent: &BlogComment) -> Self {
        self.parent_comment_id = Some(parent.id);
        self.depth = parent.depth + 1;
        self
    }

    /// Sets the submitter's contact email.
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.author_email = email;
        self
    }

    /// Sets the derived author badge (initials and avatar color).
    pub fn with_badge(mut self, initials: String, color: AvatarColor) -> Self {
        self.author_initials = initials;
        self.author_initials_color = Some(color);
        self
    }
}
