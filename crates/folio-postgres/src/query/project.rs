//! Portfolio project repository for managing project operations.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use time::OffsetDateTime;
use uuid::Uuid;

use super::Pagination;
use crate::model::{NewProject, Project, UpdateProject};
use crate::{PgError, PgResult, schema};

/// Repository for project table operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectRepository;

impl ProjectRepository {
    /// Creates a new project in the database.
    pub async fn create_project(
        conn: &mut AsyncPgConnection,
        new_project: NewProject,
    ) -> PgResult<Project> {
        use schema::projects;

        diesel::insert_into(projects::table)
            .values(&new_project)
            .returning(Project::as_returning())
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Finds a project by its slug.
    pub async fn find_project_by_slug(
        conn: &mut AsyncPgConnection,
        slug: &str,
    ) -> PgResult<Option<Project>> {
        use schema::projects::{self, dsl};

        projects::table
            .filter(dsl::slug.eq(slug))
            .select(Project::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Finds projects, featured first, then newest first.
    pub async fn find_projects(
        conn: &mut AsyncPgConnection,
        pagination: Pagination,
    ) -> PgResult<Vec<Project>> {
        use schema::projects::{self, dsl};

        projects::table
            .order((dsl::is_featured.desc(), dsl::created_at.desc()))
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(Project::as_select())
            .load(conn)
            .await
            .map_err(PgError::from)
    }

    /// Atomically increments a project's view counter.
    ///
    /// Returns the updated project, or `None` if the slug does not resolve.
    pub async fn increment_view_count(
        conn: &mut AsyncPgConnection,
        slug: &str,
    ) -> PgResult<Option<Project>> {
        use schema::projects::{self, dsl};

        diesel::update(projects::table.filter(dsl::slug.eq(slug)))
            .set(dsl::view_count.eq(dsl::view_count + 1))
            .returning(Project::as_returning())
            .get_result(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Updates a project by ID, refreshing its `updated_at` timestamp.
    pub async fn update_project(
        conn: &mut AsyncPgConnection,
        project_id: Uuid,
        updates: UpdateProject,
    ) -> PgResult<Project> {
        use schema::projects::{self, dsl};

        diesel::update(projects::table.filter(dsl::id.eq(project_id)))
            .set((&updates, dsl::updated_at.eq(OffsetDateTime::now_utc())))
            .returning(Project::as_returning())
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Deletes a project by ID. Returns whether a row was actually removed.
    pub async fn delete_project(conn: &mut AsyncPgConnection, project_id: Uuid) -> PgResult<bool> {
        use schema::projects::{self, dsl};

        let deleted = diesel::delete(projects::table.filter(dsl::id.eq(project_id)))
            .execute(conn)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }
}
