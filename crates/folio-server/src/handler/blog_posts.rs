//! Blog post handlers: public reading surface and admin CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use folio_postgres::PgClient;
use folio_postgres::model::{NewBlogPost, UpdateBlogPost as BlogPostChanges};
use folio_postgres::query::BlogPostRepository;
use folio_postgres::types::PostStatus;
use time::OffsetDateTime;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::extract::{AdminAuth, Json, ValidateJson};
use crate::handler::blog_comments::PostSlugParams;
use crate::handler::request::{CreateBlogPost, PaginationParams, UpdateBlogPost};
use crate::handler::response::{BlogPost, BlogPosts, ErrorResponse};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for blog post operations.
const TRACING_TARGET: &str = "folio_server::handler::blog_posts";

/// Lists published posts, newest publication first.
#[tracing::instrument(skip_all)]
#[utoipa::path(
    get, path = "/blog", tag = "blog",
    params(PaginationParams),
    responses(
        (
            status = INTERNAL_SERVER_ERROR,
            description = "Internal server error",
            body = ErrorResponse,
        ),
        (
            status = OK,
            description = "Published posts",
            body = BlogPosts,
        ),
    ),
)]
async fn list_posts(
    State(pg_client): State<PgClient>,
    admin_auth: Option<AdminAuth>,
    Query(pagination): Query<PaginationParams>,
) -> Result<(StatusCode, Json<BlogPosts>)> {
    let mut conn = pg_client.get_connection().await?;

    // Admin callers see drafts and archived posts as well.
    let posts = if admin_auth.is_some() {
        BlogPostRepository::find_all_posts(&mut conn, pagination.into()).await?
    } else {
        BlogPostRepository::find_published_posts(&mut conn, pagination.into()).await?
    };

    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(Into::into).collect()),
    ))
}

/// Creates a new blog post. Admin only.
#[tracing::instrument(skip_all)]
#[utoipa::path(
    post, path = "/blog", tag = "blog",
    request_body(
        content = CreateBlogPost,
        description = "New blog post",
        content_type = "application/json",
    ),
    responses(
        (
            status = BAD_REQUEST,
            description = "Validation failure",
            body = ErrorResponse,
        ),
        (
            status = UNAUTHORIZED,
            description = "Missing or invalid admin token",
            body = ErrorResponse,
        ),
        (
            status = CONFLICT,
            description = "Slug already in use",
            body = ErrorResponse,
        ),
        (
            status = INTERNAL_SERVER_ERROR,
            description = "Internal server error",
            body = ErrorResponse,
        ),
        (
            status = CREATED,
            description = "Post created",
            body = BlogPost,
        ),
    ),
)]
async fn create_post(
    State(pg_client): State<PgClient>,
    _admin: AdminAuth,
    ValidateJson(request): ValidateJson<CreateBlogPost>,
) -> Result<(StatusCode, Json<BlogPost>)> {
    let mut conn = pg_client.get_connection().await?;

    let status = if request.publish {
        PostStatus::Published
    } else {
        PostStatus::Draft
    };

    let new_post = NewBlogPost {
        slug: request.slug,
        title: request.title,
        summary: request.summary.unwrap_or_default(),
        content: request.content.unwrap_or_default(),
        status: Some(status),
        published_at: request.publish.then(OffsetDateTime::now_utc),
    };

    let post = BlogPostRepository::create_post(&mut conn, new_post).await?;

    tracing::info!(
        target: TRACING_TARGET,
        post_id = post.id.to_string(),
        slug = post.slug,
        status = %post.status,
        "Blog post created",
    );

    Ok((StatusCode::CREATED, Json(post.into())))
}

/// Returns a single post by slug.
#[tracing::instrument(skip_all)]
#[utoipa::path(
    get, path = "/blog/{slug}", tag = "blog",
    params(PostSlugParams),
    responses(
        (
            status = NOT_FOUND,
            description = "Post not found",
            body = ErrorResponse,
        ),
        (
            status = INTERNAL_SERVER_ERROR,
            description = "Internal server error",
            body = ErrorResponse,
        ),
        (
            status = OK,
            description = "Post details",
            body = BlogPost,
        ),
    ),
)]
async fn get_post(
    State(pg_client): State<PgClient>,
    admin_auth: Option<AdminAuth>,
    Path(path_params): Path<PostSlugParams>,
) -> Result<(StatusCode, Json<BlogPost>)> {
    let mut conn = pg_client.get_connection().await?;

    let post = if admin_auth.is_some() {
        BlogPostRepository::find_post_by_slug(&mut conn, &path_params.slug).await?
    } else {
        BlogPostRepository::find_published_post_by_slug(&mut conn, &path_params.slug).await?
    };

    let Some(post) = post else {
        return Err(ErrorKind::NotFound
            .with_message(format!("Post not found: {}", path_params.slug))
            .with_resource("blog_post"));
    };

    Ok((StatusCode::OK, Json(post.into())))
}

/// Updates an existing post. Admin only.
#[tracing::instrument(skip_all)]
#[utoipa::path(
    patch, path = "/blog/{slug}", tag = "blog",
    params(PostSlugParams),
    request_body(
        content = UpdateBlogPost,
        description = "Fields to update",
        content_type = "application/json",
    ),
    responses(
        (
            status = BAD_REQUEST,
            description = "Validation failure",
            body = ErrorResponse,
        ),
        (
            status = UNAUTHORIZED,
            description = "Missing or invalid admin token",
            body = ErrorResponse,
        ),
        (
            status = NOT_FOUND,
            description = "Post not found",
            body = ErrorResponse,
        ),
        (
            status = INTERNAL_SERVER_ERROR,
            description = "Internal server error",
            body = ErrorResponse,
        ),
        (
            status = OK,
            description = "Post updated",
            body = BlogPost,
        ),
    ),
)]
async fn update_post(
    State(pg_client): State<PgClient>,
    _admin: AdminAuth,
    Path(path_params): Path<PostSlugParams>,
    ValidateJson(request): ValidateJson<UpdateBlogPost>,
) -> Result<(StatusCode, Json<BlogPost>)> {
    let mut conn = pg_client.get_connection().await?;

    let Some(post) = BlogPostRepository::find_post_by_slug(&mut conn, &path_params.slug).await?
    else {
        return Err(ErrorKind::NotFound
            .with_message(format!("Post not found: {}", path_params.slug))
            .with_resource("blog_post"));
    };

    // First transition to published stamps the publication time.
    let published_at = match request.status {
        Some(PostStatus::Published) if post.published_at.is_none() => {
            Some(Some(OffsetDateTime::now_utc()))
        }
        _ => None,
    };

    let changes = BlogPostChanges {
        title: request.title,
        summary: request.summary,
        content: request.content,
        status: request.status,
        published_at,
    };

    let post = BlogPostRepository::update_post(&mut conn, post.id, changes).await?;

    tracing::info!(
        target: TRACING_TARGET,
        post_id = post.id.to_string(),
        status = %post.status,
        "Blog post updated",
    );

    Ok((StatusCode::OK, Json(post.into())))
}

/// Deletes a post and all of its comments. Admin only.
#[tracing::instrument(skip_all)]
#[utoipa::path(
    delete, path = "/blog/{slug}", tag = "blog",
    params(PostSlugParams),
    responses(
        (
            status = UNAUTHORIZED,
            description = "Missing or invalid admin token",
            body = ErrorResponse,
        ),
        (
            status = NOT_FOUND,
            description = "Post not found",
            body = ErrorResponse,
        ),
        (
            status = INTERNAL_SERVER_ERROR,
            description = "Internal server error",
            body = ErrorResponse,
        ),
        (
            status = NO_CONTENT,
            description = "Post deleted",
        ),
    ),
)]
async fn delete_post(
    State(pg_client): State<PgClient>,
    _admin: AdminAuth,
    Path(path_params): Path<PostSlugParams>,
) -> Result<StatusCode> {
    let mut conn = pg_client.get_connection().await?;

    let Some(post) = BlogPostRepository::find_post_by_slug(&mut conn, &path_params.slug).await?
    else {
        return Err(ErrorKind::NotFound
            .with_message(format!("Post not found: {}", path_params.slug))
            .with_resource("blog_post"));
    };

    BlogPostRepository::delete_post(&mut conn, post.id).await?;

    tracing::info!(
        target: TRACING_TARGET,
        post_id = post.id.to_string(),
        slug = post.slug,
        "Blog post deleted",
    );

    Ok(StatusCode::NO_CONTENT)
}

/// Returns a [`Router`] with all blog post routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new()
        .routes(routes!(list_posts, create_post))
        .routes(routes!(get_post, update_post, delete_post))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::handler::response::BlogPost;
    use crate::handler::test::{admin_bearer, create_test_server};

    #[tokio::test]
    #[ignore = "requires a running Postgres"]
    async fn create_requires_admin_token() -> anyhow::Result<()> {
        let server = create_test_server().await?;

        let response = server
            .post("/blog")
            .json(&json!({ "slug": "no-auth", "title": "No auth" }))
            .await;

        response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running Postgres"]
    async fn drafts_are_invisible_to_the_public() -> anyhow::Result<()> {
        let server = create_test_server().await?;
        let slug = format!("draft-{}", uuid::Uuid::new_v4());

        let response = server
            .post("/blog")
            .add_header("authorization", admin_bearer())
            .json(&json!({ "slug": slug, "title": "Hidden draft" }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        // Public lookup misses the draft, admin lookup finds it.
        let response = server.get(&format!("/blog/{slug}")).await;
        response.assert_status(axum::http::StatusCode::NOT_FOUND);

        let response = server
            .get(&format!("/blog/{slug}"))
            .add_header("authorization", admin_bearer())
            .await;
        response.assert_status_ok();

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running Postgres"]
    async fn publishing_stamps_published_at() -> anyhow::Result<()> {
        let server = create_test_server().await?;
        let slug = format!("draft-{}", uuid::Uuid::new_v4());

        let response = server
            .post("/blog")
            .add_header("authorization", admin_bearer())
            .json(&json!({ "slug": slug, "title": "Soon published" }))
            .await;
        let post = response.json::<BlogPost>();
        assert!(post.published_at.is_none());

        let response = server
            .patch(&format!("/blog/{slug}"))
            .add_header("authorization", admin_bearer())
            .json(&json!({ "status": "published" }))
            .await;
        response.assert_status_ok();

        let post = response.json::<BlogPost>();
        assert!(post.published_at.is_some());

        Ok(())
    }
}
