//! Blog post model for PostgreSQL database operations.

use diesel::prelude::*;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::schema::blog_posts;
use crate::types::PostStatus;

/// Blog post model representing a single article on the public site.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = blog_posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BlogPost {
    /// Unique post identifier.
    pub id: Uuid,
    /// URL-safe unique slug used to address the post.
    pub slug: String,
    /// Post title.
    pub title: String,
    /// Short summary shown in listings.
    pub summary: String,
    /// Full post body (lightweight markup, rendered downstream).
    pub content: String,
    /// Lifecycle status; only published posts are publicly visible.
    pub status: PostStatus,
    /// Timestamp when the post went live.
    pub published_at: Option<OffsetDateTime>,
    /// Timestamp when the post was created.
    pub created_at: OffsetDateTime,
    /// Timestamp when the post was last updated.
    pub updated_at: OffsetDateTime,
}

/// Data for creating a new blog post.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = blog_posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewBlogPost {
    /// URL-safe unique slug.
    pub slug: String,
    /// Post title.
    pub title: String,
    /// Short summary.
    pub summary: String,
    /// Full post body.
    pub content: String,
    /// Initial lifecycle status.
    pub status: Option<PostStatus>,
    /// Publication timestamp, set when created already published.
    pub published_at: Option<OffsetDateTime>,
}

/// Data for updating a blog post.
#[derive(Debug, Default, Clone, AsChangeset)]
#[diesel(table_name = blog_posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateBlogPost {
    /// Updated title.
    pub title: Option<String>,
    /// Updated summary.
    pub summary: Option<String>,
    /// Updated body.
    pub content: Option<String>,
    /// Updated lifecycle status.
    pub status: Option<PostStatus>,
    /// Updated publication timestamp.
    pub published_at: Option<Option<OffsetDateTime>>,
}

impl BlogPost {
    /// Returns whether the post is visible to public callers.
    #[inline]
    pub fn is_public(&self) -> bool {
        self.status.is_public()
    }

    /// Returns whether the post accepts new comments.
    #[inline]
    pub fn accepts_comments(&self) -> bool {
        self.status.accepts_comments()
    }
}

impl NewBlogPost {
    /// Creates a new draft post with the given slug and title.
    pub fn draft(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Marks the post as published as of the given timestamp.
    pub fn published_at(mut self, at: OffsetDateTime) -> Self {
        self.status = Some(PostStatus::Published);
        self.published_at = Some(at);
        self
    }
}
