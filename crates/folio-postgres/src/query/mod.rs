//! Database query repositories for all entities in the system.
//!
//! This module contains repository implementations that provide high-level
//! database operations for all entities, encapsulating common patterns
//! and providing type-safe interfaces.
//!
//! # Pagination
//!
//! Queries that may return large result sets use the [`Pagination`] struct
//! to provide consistent, bounded pagination. Comment listing is the
//! deliberate exception: tree assembly needs every record for a post, so
//! [`BlogCommentRepository::find_comments_by_post`] is unbounded.

pub mod blog_comment;
pub mod blog_post;
pub mod project;
pub mod visitor_message;

pub use blog_comment::BlogCommentRepository;
pub use blog_post::BlogPostRepository;
pub use project::ProjectRepository;
use serde::{Deserialize, Serialize};
pub use visitor_message::VisitorMessageRepository;

/// Pagination parameters for database queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Maximum number of records to return.
    pub limit: i64,
    /// Number of records to skip.
    pub offset: i64,
}

impl Pagination {
    /// Creates a new pagination instance.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            // Ensure limit is between 1 and 100
            limit: limit.clamp(1, 100),
            // Ensure offset is non-negative
            offset: offset.max(0),
        }
    }

    /// Creates pagination from page number and page size.
    ///
    /// Page numbers come straight from query strings, so the offset math
    /// saturates instead of overflowing on absurd page values.
    pub fn from_page(page: i64, page_size: i64) -> Self {
        let offset = page
            .max(1)
            .saturating_sub(1)
            .saturating_mul(page_size.clamp(1, 100));
        Self::new(page_size, offset)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_clamps_bounds() {
        let pagination = Pagination::new(10_000, -5);
        assert_eq!(pagination.limit, 100);
        assert_eq!(pagination.offset, 0);
    }

    #[test]
    fn pagination_from_page() {
        let pagination = Pagination::from_page(3, 20);
        assert_eq!(pagination.limit, 20);
        assert_eq!(pagination.offset, 40);
    }

    #[test]
    fn pagination_from_page_saturates_on_huge_pages() {
        let pagination = Pagination::from_page(i64::MAX, 100);
        assert_eq!(pagination.limit, 100);
        assert_eq!(pagination.offset, i64::MAX);

        let pagination = Pagination::from_page(i64::MIN, 20);
        assert_eq!(pagination.offset, 0);
    }
}
