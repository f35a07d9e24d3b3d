//! Blog post repository for managing post operations.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use time::OffsetDateTime;
use uuid::Uuid;

use super::Pagination;
use crate::model::{BlogPost, NewBlogPost, UpdateBlogPost};
use crate::types::PostStatus;
use crate::{PgError, PgResult, schema};

/// Repository for blog post table operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlogPostRepository;

impl BlogPostRepository {
    /// Creates a new post in the database.
    pub async fn create_post(
        conn: &mut AsyncPgConnection,
        new_post: NewBlogPost,
    ) -> PgResult<BlogPost> {
        use schema::blog_posts;

        diesel::insert_into(blog_posts::table)
            .values(&new_post)
            .returning(BlogPost::as_returning())
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Finds a post by its ID.
    pub async fn find_post_by_id(
        conn: &mut AsyncPgConnection,
        post_id: Uuid,
    ) -> PgResult<Option<BlogPost>> {
        use schema::blog_posts::{self, dsl};

        blog_posts::table
            .filter(dsl::id.eq(post_id))
            .select(BlogPost::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Finds a post by its slug, regardless of status.
    pub async fn find_post_by_slug(
        conn: &mut AsyncPgConnection,
        slug: &str,
    ) -> PgResult<Option<BlogPost>> {
        use schema::blog_posts::{self, dsl};

        blog_posts::table
            .filter(dsl::slug.eq(slug))
            .select(BlogPost::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Finds a published post by its slug.
    ///
    /// Draft and archived posts are invisible here, matching the public
    /// visibility rule.
    pub async fn find_published_post_by_slug(
        conn: &mut AsyncPgConnection,
        slug: &str,
    ) -> PgResult<Option<BlogPost>> {
        use schema::blog_posts::{self, dsl};

        blog_posts::table
            .filter(dsl::slug.eq(slug))
            .filter(dsl::status.eq(PostStatus::Published))
            .select(BlogPost::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Finds published posts, newest publication first.
    pub async fn find_published_posts(
        conn: &mut AsyncPgConnection,
        pagination: Pagination,
    ) -> PgResult<Vec<BlogPost>> {
        use schema::blog_posts::{self, dsl};

        blog_posts::table
            .filter(dsl::status.eq(PostStatus::Published))
            .order(dsl::published_at.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(BlogPost::as_select())
            .load(conn)
            .await
            .map_err(PgError::from)
    }

    /// Finds all posts regardless of status, newest creation first.
    pub async fn find_all_posts(
        conn: &mut AsyncPgConnection,
        pagination: Pagination,
    ) -> PgResult<Vec<BlogPost>> {
        use schema::blog_posts::{self, dsl};

        blog_posts::table
            .order(dsl::created_at.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(BlogPost::as_select())
            .load(conn)
            .await
            .map_err(PgError::from)
    }

    /// Updates a post by ID, refreshing its `updated_at` timestamp.
    pub async fn update_post(
        conn: &mut AsyncPgConnection,
        post_id: Uuid,
        updates: UpdateBlogPost,
    ) -> PgResult<BlogPost> {
        use schema::blog_posts::{self, dsl};

        diesel::update(blog_posts::table.filter(dsl::id.eq(post_id)))
            .set((&updates, dsl::updated_at.eq(OffsetDateTime::now_utc())))
            .returning(BlogPost::as_returning())
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Deletes a post by ID, cascading to its comments.
    ///
    /// Returns whether a row was actually removed.
    pub async fn delete_post(conn: &mut AsyncPgConnection, post_id: Uuid) -> PgResult<bool> {
        use schema::blog_posts::{self, dsl};

        let deleted = diesel::delete(blog_posts::table.filter(dsl::id.eq(post_id)))
            .execute(conn)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }

    /// Counts published posts.
    pub async fn count_published_posts(conn: &mut AsyncPgConnection) -> PgResult<i64> {
        use schema::blog_posts::{self, dsl};

        blog_posts::table
            .filter(dsl::status.eq(PostStatus::Published))
            .count()
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }
}
