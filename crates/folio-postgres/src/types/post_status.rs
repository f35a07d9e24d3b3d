//! Blog post status enumeration for post lifecycle management.

use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
#[cfg(feature = "schema")]
use utoipa::ToSchema;

/// Defines the current status of a blog post in its lifecycle.
///
/// This enumeration corresponds to the `POST_STATUS` PostgreSQL enum and is used
/// to track posts from drafting through publication and archival. Only published
/// posts are visible to (and commentable by) the public.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(ToSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::PostStatus"]
pub enum PostStatus {
    /// Post is being written and is not publicly visible
    #[db_rename = "draft"]
    #[serde(rename = "draft")]
    #[default]
    Draft,

    /// Post is live on the public site
    #[db_rename = "published"]
    #[serde(rename = "published")]
    Published,

    /// Post is retired from the public site but kept for reference
    #[db_rename = "archived"]
    #[serde(rename = "archived")]
    Archived,
}

impl PostStatus {
    /// Returns whether the post is visible to public callers.
    #[inline]
    pub fn is_public(self) -> bool {
        matches!(self, PostStatus::Published)
    }

    /// Returns whether the post accepts new comments.
    ///
    /// A post that is not publicly visible is not commentable.
    #[inline]
    pub fn accepts_comments(self) -> bool {
        self.is_public()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_published_is_public() {
        assert!(PostStatus::Published.is_public());
        assert!(!PostStatus::Draft.is_public());
        assert!(!PostStatus::Archived.is_public());
    }

    #[test]
    fn commentable_matches_visibility() {
        assert!(PostStatus::Published.accepts_comments());
        assert!(!PostStatus::Draft.accepts_comments());
    }
}
