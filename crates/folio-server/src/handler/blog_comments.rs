//! Blog comment handlers: threaded listing, submission, and moderation.
//!
//! Comments are stored flat and reassembled into a nested thread on every
//! read. Submission is public (no account required); deletion is guarded by
//! the admin bearer token and cascades to the whole reply subtree.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use folio_postgres::PgClient;
use folio_postgres::model::NewBlogComment;
use folio_postgres::query::{BlogCommentRepository, BlogPostRepository};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use uuid::Uuid;

use crate::extract::{AdminAuth, Json, ValidateJson};
use crate::handler::request::CreateBlogComment;
use crate::handler::response::{BlogComment, BlogComments, CommentDeleted, ErrorResponse};
use crate::handler::{ErrorKind, Result};
use crate::service::{self, ServiceState};

/// Tracing target for blog comment operations.
const TRACING_TARGET: &str = "folio_server::handler::blog_comments";

/// Path params for a post slug.
#[must_use]
#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PostSlugParams {
    /// URL-safe identifier of the blog post.
    pub slug: String,
}

/// Query params for listing comments.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListCommentsParams {
    /// Request the admin view, which includes unapproved comments.
    #[serde(default)]
    pub admin: bool,
}

/// Query params for deleting a comment.
#[must_use]
#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DeleteCommentParams {
    /// Unique identifier of the comment to delete.
    pub id: Uuid,
}

/// Returns the comment thread of a post as a nested forest.
#[tracing::instrument(skip_all)]
#[utoipa::path(
    get, path = "/blog/{slug}/comments", tag = "comments",
    params(PostSlugParams, ListCommentsParams),
    responses(
        (
            status = NOT_FOUND,
            description = "Post not found",
            body = ErrorResponse,
        ),
        (
            status = UNAUTHORIZED,
            description = "Admin view requested without a valid token",
            body = ErrorResponse,
        ),
        (
            status = INTERNAL_SERVER_ERROR,
            description = "Internal server error",
            body = ErrorResponse,
        ),
        (
            status = OK,
            description = "Nested comment thread",
            body = BlogComments,
        ),
    ),
)]
async fn list_comments(
    State(pg_client): State<PgClient>,
    admin_auth: Option<AdminAuth>,
    Path(path_params): Path<PostSlugParams>,
    Query(query): Query<ListCommentsParams>,
) -> Result<(StatusCode, Json<BlogComments>)> {
    let as_admin = query.admin;
    if as_admin && admin_auth.is_none() {
        return Err(ErrorKind::MissingAuthToken
            .with_context("the admin comment view requires a bearer token"));
    }

    let mut conn = pg_client.get_connection().await?;

    let Some(post) = BlogPostRepository::find_post_by_slug(&mut conn, &path_params.slug).await?
    else {
        return Err(ErrorKind::NotFound
            .with_message(format!("Post not found: {}", path_params.slug))
            .with_resource("blog_post"));
    };

    // Draft and archived posts don't exist as far as the public is concerned.
    if !as_admin && !post.status.is_public() {
        return Err(ErrorKind::NotFound
            .with_message(format!("Post not found: {}", path_params.slug))
            .with_resource("blog_post"));
    }

    let comments = if as_admin {
        BlogCommentRepository::find_comments_by_post(&mut conn, post.id).await?
    } else {
        BlogCommentRepository::find_approved_comments_by_post(&mut conn, post.id).await?
    };

    tracing::debug!(
        target: TRACING_TARGET,
        post_id = post.id.to_string(),
        as_admin = as_admin,
        comment_count = comments.len(),
        "Listed post comments",
    );

    let tree = service::build_comment_tree(comments);
    Ok((StatusCode::OK, Json(tree.into())))
}

/// Submits a new comment on a published post.
#[tracing::instrument(skip_all)]
#[utoipa::path(
    post, path = "/blog/{slug}/comments", tag = "comments",
    params(PostSlugParams),
    request_body(
        content = CreateBlogComment,
        description = "New comment",
        content_type = "application/json",
    ),
    responses(
        (
            status = BAD_REQUEST,
            description = "Validation failure or unresolvable parent comment",
            body = ErrorResponse,
        ),
        (
            status = NOT_FOUND,
            description = "Post not found or not published",
            body = ErrorResponse,
        ),
        (
            status = INTERNAL_SERVER_ERROR,
            description = "Internal server error",
            body = ErrorResponse,
        ),
        (
            status = CREATED,
            description = "Comment created",
            body = BlogComment,
        ),
    ),
)]
async fn create_comment(
    State(pg_client): State<PgClient>,
    Path(path_params): Path<PostSlugParams>,
    ValidateJson(request): ValidateJson<CreateBlogComment>,
) -> Result<(StatusCode, Json<BlogComment>)> {
    let mut conn = pg_client.get_connection().await?;

    // A post invisible to the public is not commentable either.
    let Some(post) =
        BlogPostRepository::find_published_post_by_slug(&mut conn, &path_params.slug).await?
    else {
        return Err(ErrorKind::NotFound
            .with_message(format!("Post not found: {}", path_params.slug))
            .with_resource("blog_post"));
    };

    let mut new_comment = NewBlogComment::for_post(
        post.id,
        request.author_name.clone(),
        request.content.clone(),
    )
    .with_email(request.author_email.clone());

    // Validate parent comment if provided. The parent fixes this comment's
    // depth, so the lookup must complete before the insert.
    if let Some(parent_id) = request.parent_comment_id {
        let Some(parent) = BlogCommentRepository::find_comment_by_id(&mut conn, parent_id).await?
        else {
            return Err(ErrorKind::BadRequest
                .with_message("Parent comment not found")
                .with_resource("blog_comment"));
        };

        if parent.post_id != post.id {
            return Err(ErrorKind::BadRequest
                .with_message("Parent comment must belong to the same post")
                .with_resource("blog_comment"));
        }

        new_comment = new_comment.reply_to(&parent);
    }

    let initials = service::derive_initials(&request.author_name);
    let color = service::pick_avatar_color(&mut rand::rng());
    let new_comment = new_comment.with_badge(initials, color);

    let comment = BlogCommentRepository::create_comment(&mut conn, new_comment).await?;

    tracing::debug!(
        target: TRACING_TARGET,
        post_id = post.id.to_string(),
        comment_id = comment.id.to_string(),
        depth = comment.depth,
        "Comment created",
    );

    Ok((StatusCode::CREATED, Json(comment.into())))
}

/// Deletes a comment and its entire reply subtree. Admin only.
#[tracing::instrument(skip_all)]
#[utoipa::path(
    delete, path = "/blog/{slug}/comments", tag = "comments",
    params(PostSlugParams, DeleteCommentParams),
    responses(
        (
            status = UNAUTHORIZED,
            description = "Missing or invalid admin token",
            body = ErrorResponse,
        ),
        (
            status = NOT_FOUND,
            description = "Post or comment not found",
            body = ErrorResponse,
        ),
        (
            status = INTERNAL_SERVER_ERROR,
            description = "Internal server error",
            body = ErrorResponse,
        ),
        (
            status = OK,
            description = "Comment deleted",
            body = CommentDeleted,
        ),
    ),
)]
async fn delete_comment(
    State(pg_client): State<PgClient>,
    _admin: AdminAuth,
    Path(path_params): Path<PostSlugParams>,
    Query(query): Query<DeleteCommentParams>,
) -> Result<(StatusCode, Json<CommentDeleted>)> {
    let mut conn = pg_client.get_connection().await?;

    let Some(post) = BlogPostRepository::find_post_by_slug(&mut conn, &path_params.slug).await?
    else {
        return Err(ErrorKind::NotFound
            .with_message(format!("Post not found: {}", path_params.slug))
            .with_resource("blog_post"));
    };

    let Some(comment) = BlogCommentRepository::find_comment_by_id(&mut conn, query.id).await?
    else {
        return Err(ErrorKind::NotFound
            .with_message(format!("Comment not found: {}", query.id))
            .with_resource("blog_comment"));
    };

    if comment.post_id != post.id {
        return Err(ErrorKind::NotFound
            .with_message("Comment does not belong to this post")
            .with_resource("blog_comment"));
    }

    // The cascading foreign key removes the reply subtree with this row.
    let deleted = BlogCommentRepository::delete_comment(&mut conn, query.id).await?;
    if !deleted {
        return Err(ErrorKind::NotFound
            .with_message(format!("Comment not found: {}", query.id))
            .with_resource("blog_comment"));
    }

    tracing::info!(
        target: TRACING_TARGET,
        post_id = post.id.to_string(),
        comment_id = query.id.to_string(),
        "Comment deleted",
    );

    Ok((
        StatusCode::OK,
        Json(CommentDeleted {
            message: format!("Comment {} deleted", query.id),
        }),
    ))
}

/// Returns a [`Router`] with all blog comment routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new().routes(routes!(list_comments, create_comment, delete_comment))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::handler::test::{admin_bearer, create_published_post, create_test_server};
    use crate::handler::response::{BlogComment, BlogComments, ErrorResponse};

    #[tokio::test]
    #[ignore = "requires a running Postgres"]
    async fn threaded_scenario_end_to_end() -> anyhow::Result<()> {
        let server = create_test_server().await?;
        let slug = create_published_post(&server).await?;

        // Root comment A.
        let response = server
            .post(&format!("/blog/{slug}/comments"))
            .json(&json!({
                "authorName": "Jane Doe",
                "content": "root comment"
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        let a = response.json::<BlogComment>();
        assert_eq!(a.depth, 0);
        assert_eq!(a.author_initials, "JD");

        // B replies to A.
        let response = server
            .post(&format!("/blog/{slug}/comments"))
            .json(&json!({
                "authorName": "Madonna",
                "content": "first reply",
                "parentCommentId": a.comment_id
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        let b = response.json::<BlogComment>();
        assert_eq!(b.depth, 1);
        assert_eq!(b.author_initials, "M");

        // C replies to B.
        let response = server
            .post(&format!("/blog/{slug}/comments"))
            .json(&json!({
                "authorName": "Sam Lee",
                "content": "nested reply",
                "parentCommentId": b.comment_id
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        let c = response.json::<BlogComment>();
        assert_eq!(c.depth, 2);

        // Listing returns one root with the nested chain.
        let response = server.get(&format!("/blog/{slug}/comments")).await;
        response.assert_status_ok();
        let thread = response.json::<BlogComments>();

        assert_eq!(thread.comments.len(), 1);
        let root = &thread.comments[0];
        assert_eq!(root.comment.comment_id, a.comment_id);
        assert_eq!(root.replies.len(), 1);
        assert_eq!(root.replies[0].comment.comment_id, b.comment_id);
        assert_eq!(root.replies[0].replies[0].comment.comment_id, c.comment_id);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running Postgres"]
    async fn unknown_parent_is_rejected() -> anyhow::Result<()> {
        let server = create_test_server().await?;
        let slug = create_published_post(&server).await?;

        let response = server
            .post(&format!("/blog/{slug}/comments"))
            .json(&json!({
                "authorName": "Jane Doe",
                "content": "reply to nothing",
                "parentCommentId": uuid::Uuid::new_v4()
            }))
            .await;

        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
        let error = response.json::<ErrorResponse>();
        assert_eq!(error.name, "bad_request");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running Postgres"]
    async fn cross_post_parent_is_rejected() -> anyhow::Result<()> {
        let server = create_test_server().await?;
        let first_slug = create_published_post(&server).await?;
        let second_slug = create_published_post(&server).await?;

        let response = server
            .post(&format!("/blog/{first_slug}/comments"))
            .json(&json!({ "authorName": "Jane Doe", "content": "root" }))
            .await;
        let parent = response.json::<BlogComment>();

        let response = server
            .post(&format!("/blog/{second_slug}/comments"))
            .json(&json!({
                "authorName": "Jane Doe",
                "content": "cross-post reply",
                "parentCommentId": parent.comment_id
            }))
            .await;

        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running Postgres"]
    async fn draft_posts_reject_comments() -> anyhow::Result<()> {
        let server = create_test_server().await?;

        // Created as a draft, so the public cannot comment on it.
        let slug = format!("draft-{}", uuid::Uuid::new_v4());
        let response = server
            .post("/blog")
            .add_header("authorization", admin_bearer())
            .json(&json!({ "slug": slug, "title": "Draft post" }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        let response = server
            .post(&format!("/blog/{slug}/comments"))
            .json(&json!({ "authorName": "Jane Doe", "content": "hello" }))
            .await;

        response.assert_status(axum::http::StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running Postgres"]
    async fn empty_fields_fail_validation() -> anyhow::Result<()> {
        let server = create_test_server().await?;
        let slug = create_published_post(&server).await?;

        let response = server
            .post(&format!("/blog/{slug}/comments"))
            .json(&json!({ "authorName": "", "content": "" }))
            .await;

        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running Postgres"]
    async fn delete_cascades_and_requires_admin() -> anyhow::Result<()> {
        let server = create_test_server().await?;
        let slug = create_published_post(&server).await?;

        let response = server
            .post(&format!("/blog/{slug}/comments"))
            .json(&json!({ "authorName": "Jane Doe", "content": "root" }))
            .await;
        let root = response.json::<BlogComment>();

        let response = server
            .post(&format!("/blog/{slug}/comments"))
            .json(&json!({
                "authorName": "Sam Lee",
                "content": "reply",
                "parentCommentId": root.comment_id
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        // No token: rejected before any side effect.
        let response = server
            .delete(&format!("/blog/{slug}/comments?id={}", root.comment_id))
            .await;
        response.assert_status(axum::http::StatusCode::UNAUTHORIZED);

        // With token: the whole subtree goes away.
        let response = server
            .delete(&format!("/blog/{slug}/comments?id={}", root.comment_id))
            .add_header("authorization", admin_bearer())
            .await;
        response.assert_status_ok();

        let response = server.get(&format!("/blog/{slug}/comments")).await;
        let thread = response.json::<BlogComments>();
        assert!(thread.comments.is_empty());

        // Second delete of the same id reports not-found.
        let response = server
            .delete(&format!("/blog/{slug}/comments?id={}", root.comment_id))
            .add_header("authorization", admin_bearer())
            .await;
        response.assert_status(axum::http::StatusCode::NOT_FOUND);

        Ok(())
    }
}
