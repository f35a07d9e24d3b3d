//! Portfolio project handlers.
//!
//! The public surface lists projects and serves detail pages, counting each
//! detail view. Creation and maintenance are admin-only.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use folio_postgres::PgClient;
use folio_postgres::model::{NewProject, UpdateProject as ProjectChanges};
use folio_postgres::query::ProjectRepository;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::extract::{AdminAuth, Json, ValidateJson};
use crate::handler::request::{CreateProject, PaginationParams, UpdateProject};
use crate::handler::response::{ErrorResponse, Project, Projects};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for project operations.
const TRACING_TARGET: &str = "folio_server::handler::projects";

/// Path params for a project slug.
#[must_use]
#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSlugParams {
    /// URL-safe identifier of the project.
    pub slug: String,
}

/// Lists projects, featured first, then newest.
#[tracing::instrument(skip_all)]
#[utoipa::path(
    get, path = "/projects", tag = "projects",
    params(PaginationParams),
    responses(
        (
            status = INTERNAL_SERVER_ERROR,
            description = "Internal server error",
            body = ErrorResponse,
        ),
        (
            status = OK,
            description = "Project listing",
            body = Projects,
        ),
    ),
)]
async fn list_projects(
    State(pg_client): State<PgClient>,
    Query(pagination): Query<PaginationParams>,
) -> Result<(StatusCode, Json<Projects>)> {
    let mut conn = pg_client.get_connection().await?;

    let projects = ProjectRepository::find_projects(&mut conn, pagination.into()).await?;

    Ok((
        StatusCode::OK,
        Json(projects.into_iter().map(Into::into).collect()),
    ))
}

/// Creates a new project. Admin only.
#[tracing::instrument(skip_all)]
#[utoipa::path(
    post, path = "/projects", tag = "projects",
    request_body(
        content = CreateProject,
        description = "New project",
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
            description = "Project created",
            body = Project,
        ),
    ),
)]
async fn create_project(
    State(pg_client): State<PgClient>,
    _admin: AdminAuth,
    ValidateJson(request): ValidateJson<CreateProject>,
) -> Result<(StatusCode, Json<Project>)> {
    let mut conn = pg_client.get_connection().await?;

    let new_project = NewProject {
        slug: request.slug,
        name: request.name,
        summary: request.summary.unwrap_or_default(),
        description: request.description.unwrap_or_default(),
        repo_url: request.repo_url,
        live_url: request.live_url,
        tech_stack: request.tech_stack,
        is_featured: request.is_featured,
    };

    let project = ProjectRepository::create_project(&mut conn, new_project).await?;

    tracing::info!(
        target: TRACING_TARGET,
        project_id = project.id.to_string(),
        slug = project.slug,
        "Project created",
    );

    Ok((StatusCode::CREATED, Json(project.into())))
}

/// Returns a single project by slug, counting the view.
#[tracing::instrument(skip_all)]
#[utoipa::path(
    get, path = "/projects/{slug}", tag = "projects",
    params(ProjectSlugParams),
    responses(
        (
            status = NOT_FOUND,
            description = "Project not found",
            body = ErrorResponse,
        ),
        (
            status = INTERNAL_SERVER_ERROR,
            description = "Internal server error",
            body = ErrorResponse,
        ),
        (
            status = OK,
            description = "Project details",
            body = Project,
        ),
    ),
)]
async fn get_project(
    State(pg_client): State<PgClient>,
    Path(path_params): Path<ProjectSlugParams>,
) -> Result<(StatusCode, Json<Project>)> {
    let mut conn = pg_client.get_connection().await?;

    // Atomic increment-and-return; no separate read needed.
    let Some(project) =
        ProjectRepository::increment_view_count(&mut conn, &path_params.slug).await?
    else {
        return Err(ErrorKind::NotFound
            .with_message(format!("Project not found: {}", path_params.slug))
            .with_resource("project"));
    };

    Ok((StatusCode::OK, Json(project.into())))
}

/// Updates an existing project. Admin only.
#[tracing::instrument(skip_all)]
#[utoipa::path(
    patch, path = "/projects/{slug}", tag = "projects",
    params(ProjectSlugParams),
    request_body(
        content = UpdateProject,
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
            description = "Project not found",
            body = ErrorResponse,
        ),
        (
            status = INTERNAL_SERVER_ERROR,
            description = "Internal server error",
            body = ErrorResponse,
        ),
        (
            status = OK,
            description = "Project updated",
            body = Project,
        ),
    ),
)]
async fn update_project(
    State(pg_client): State<PgClient>,
    _admin: AdminAuth,
    Path(path_params): Path<ProjectSlugParams>,
    ValidateJson(request): ValidateJson<UpdateProject>,
) -> Result<(StatusCode, Json<Project>)> {
    let mut conn = pg_client.get_connection().await?;

    let Some(project) =
        ProjectRepository::find_project_by_slug(&mut conn, &path_params.slug).await?
    else {
        return Err(ErrorKind::NotFound
            .with_message(format!("Project not found: {}", path_params.slug))
            .with_resource("project"));
    };

    let changes = ProjectChanges {
        name: request.name,
        summary: request.summary,
        description: request.description,
        repo_url: request.repo_url.map(Some),
        live_url: request.live_url.map(Some),
        tech_stack: request.tech_stack,
        is_featured: request.is_featured,
    };

    let project = ProjectRepository::update_project(&mut conn, project.id, changes).await?;

    tracing::info!(
        target: TRACING_TARGET,
        project_id = project.id.to_string(),
        "Project updated",
    );

    Ok((StatusCode::OK, Json(project.into())))
}

/// Deletes a project. Admin only.
#[tracing::instrument(skip_all)]
#[utoipa::path(
    delete, path = "/projects/{slug}", tag = "projects",
    params(ProjectSlugParams),
    responses(
        (
            status = UNAUTHORIZED,
            description = "Missing or invalid admin token",
            body = ErrorResponse,
        ),
        (
            status = NOT_FOUND,
            description = "Project not found",
            body = ErrorResponse,
        ),
        (
            status = INTERNAL_SERVER_ERROR,
            description = "Internal server error",
            body = ErrorResponse,
        ),
        (
            status = NO_CONTENT,
            description = "Project deleted",
        ),
    ),
)]
async fn delete_project(
    State(pg_client): State<PgClient>,
    _admin: AdminAuth,
    Path(path_params): Path<ProjectSlugParams>,
) -> Result<StatusCode> {
    let mut conn = pg_client.get_connection().await?;

    let Some(project) =
        ProjectRepository::find_project_by_slug(&mut conn, &path_params.slug).await?
    else {
        return Err(ErrorKind::NotFound
            .with_message(format!("Project not found: {}", path_params.slug))
            .with_resource("project"));
    };

    ProjectRepository::delete_project(&mut conn, project.id).await?;

    tracing::info!(
        target: TRACING_TARGET,
        project_id = project.id.to_string(),
        slug = project.slug,
        "Project deleted",
    );

    Ok(StatusCode::NO_CONTENT)
}

/// Returns a [`Router`] with all project routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new()
        .routes(routes!(list_projects, create_project))
        .routes(routes!(get_project, update_project, delete_project))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::handler::response::Project;
    use crate::handler::test::{admin_bearer, create_test_server};

    #[tokio::test]
    #[ignore = "requires a running Postgres"]
    async fn detail_views_are_counted() -> anyhow::Result<()> {
        let server = create_test_server().await?;
        let slug = format!("project-{}", uuid::Uuid::new_v4());

        let response = server
            .post("/projects")
            .add_header("authorization", admin_bearer())
            .json(&json!({ "slug": slug, "name": "Test project" }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        let first = server.get(&format!("/projects/{slug}")).await;
        let second = server.get(&format!("/projects/{slug}")).await;

        let first = first.json::<Project>();
        let second = second.json::<Project>();
        assert_eq!(second.view_count, first.view_count + 1);

        Ok(())
    }
}
