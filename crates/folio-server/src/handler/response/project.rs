//! Project response types.

use folio_postgres::model;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

/// Represents a portfolio project.
#[must_use]
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// ID of the project.
    pub project_id: Uuid,
    /// URL-safe unique identifier.
    pub slug: String,
    /// Project name.
    pub name: String,
    /// Short summary shown in listings.
    pub summary: String,
    /// Full project description.
    pub description: String,
    /// Source repository URL.
    pub repo_url: Option<String>,
    /// Live deployment URL.
    pub live_url: Option<String>,
    /// Technologies used.
    pub tech_stack: Vec<String>,
    /// Whether the project is pinned to the top of the listing.
    pub is_featured: bool,
    /// Number of detail-page views.
    pub view_count: i32,
    /// Timestamp when the project was created.
    pub created_at: OffsetDateTime,
    /// Timestamp when the project was last updated.
    pub updated_at: OffsetDateTime,
}

impl From<model::Project> for Project {
    fn from(project: model::Project) -> Self {
        Self {
            project_id: project.id,
            slug: project.slug,
            name: project.name,
            summary: project.summary,
            description: project.description,
            repo_url: project.repo_url,
            live_url: project.live_url,
            tech_stack: project.tech_stack,
            is_featured: project.is_featured,
            view_count: project.view_count,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

/// Response for listing projects.
pub type Projects = Vec<Project>;
