//! Blog comment repository for managing comment operations.
//!
//! This is the comment store: flat records keyed by post and optional parent,
//! with no business logic beyond storage. Thread reconstruction happens in
//! the server layer from the `created_at ASC` ordered flat lists returned
//! here.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::model::{BlogComment, NewBlogComment};
use crate::{PgError, PgResult, schema};

/// Repository for blog comment table operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlogCommentRepository;

impl BlogCommentRepository {
    /// Creates a new comment in the database.
    pub async fn create_comment(
        conn: &mut AsyncPgConnection,
        new_comment: NewBlogComment,
    ) -> PgResult<BlogComment> {
        use schema::blog_comments;

        diesel::insert_into(blog_comments::table)
            .values(&new_comment)
            .returning(BlogComment::as_returning())
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Finds a comment by its ID.
    pub async fn find_comment_by_id(
        conn: &mut AsyncPgConnection,
        comment_id: Uuid,
    ) -> PgResult<Option<BlogComment>> {
        use schema::blog_comments::{self, dsl};

        blog_comments::table
            .filter(dsl::id.eq(comment_id))
            .select(BlogComment::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Finds all comments for a post, oldest first.
    ///
    /// Deliberately unpaginated: tree assembly needs the complete record
    /// set, and `created_at ASC` is the order the tree builder relies on
    /// for sibling ordering.
    pub async fn find_comments_by_post(
        conn: &mut AsyncPgConnection,
        post_id: Uuid,
    ) -> PgResult<Vec<BlogComment>> {
        use schema::blog_comments::{self, dsl};

        blog_comments::table
            .filter(dsl::post_id.eq(post_id))
            .order(dsl::created_at.asc())
            .select(BlogComment::as_select())
            .load(conn)
            .await
            .map_err(PgError::from)
    }

    /// Finds approved comments for a post, oldest first.
    ///
    /// This is the public view; unapproved comments are only visible to
    /// admin callers via [`BlogCommentRepository::find_comments_by_post`].
    pub async fn find_approved_comments_by_post(
        conn: &mut AsyncPgConnection,
        post_id: Uuid,
    ) -> PgResult<Vec<BlogComment>> {
        use schema::blog_comments::{self, dsl};

        blog_comments::table
            .filter(dsl::post_id.eq(post_id))
            .filter(dsl::is_approved.eq(true))
            .order(dsl::created_at.asc())
            .select(BlogComment::as_select())
            .load(conn)
            .await
            .map_err(PgError::from)
    }

    /// Deletes a comment by ID.
    ///
    /// The reply subtree is removed by the cascading self-referential
    /// foreign key, so a single row delete is sufficient. Returns whether
    /// a row was actually removed.
    pub async fn delete_comment(
        conn: &mut AsyncPgConnection,
        comment_id: Uuid,
    ) -> PgResult<bool> {
        use schema::blog_comments::{self, dsl};

        let deleted = diesel::delete(blog_comments::table.filter(dsl::id.eq(comment_id)))
            .execute(conn)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }

    /// Counts all comments for a post.
    pub async fn count_comments_by_post(
        conn: &mut AsyncPgConnection,
        post_id: Uuid,
    ) -> PgResult<i64> {
        use schema::blog_comments::{self, dsl};

        blog_comments::table
            .filter(dsl::post_id.eq(post_id))
            .count()
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }
}
