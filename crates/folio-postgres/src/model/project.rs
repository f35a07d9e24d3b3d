//! Portfolio project model for PostgreSQL database operations.

use diesel::prelude::*;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::schema::projects;

/// Portfolio project model representing a showcased piece of work.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Project {
    /// Unique project identifier.
    pub id: Uuid,
    /// URL-safe unique slug used to address the project.
    pub slug: String,
    /// Project name.
    pub name: String,
    /// Short summary shown in listings.
    pub summary: String,
    /// Full project description.
    pub description: String,
    /// Link to the source repository.
    pub repo_url: Option<String>,
    /// Link to a live deployment.
    pub live_url: Option<String>,
    /// Technologies used, shown as tags.
    pub tech_stack: Vec<String>,
    /// Whether the project is pinned to the top of listings.
    pub is_featured: bool,
    /// Number of detail-page views.
    pub view_count: i32,
    /// Timestamp when the project was created.
    pub created_at: OffsetDateTime,
    /// Timestamp when the project was last updated.
    pub updated_at: OffsetDateTime,
}

/// Data for creating a new project.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewProject {
    /// URL-safe unique slug.
    pub slug: String,
    /// Project name.
    pub name: String,
    /// Short summary.
    pub summary: String,
    /// Full description.
    pub description: String,
    /// Source repository link.
    pub repo_url: Option<String>,
    /// Live deployment link.
    pub live_url: Option<String>,
    /// Technology tags.
    pub tech_stack: Vec<String>,
    /// Whether to pin the project in listings.
    pub is_featured: bool,
}

/// Data for updating a project.
#[derive(Debug, Default, Clone, AsChangeset)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateProject {
    /// Updated name.
    pub name: Option<String>,
    /// Updated summary.
    pub summary: Option<String>,
    /// Updated description.
    pub description: Option<String>,
    /// Updated repository link.
    pub repo_url: Option<Option<String>>,
    /// Updated live link.
    pub live_url: Option<Option<String>>,
    /// Updated technology tags.
    pub tech_stack: Option<Vec<String>>,
    /// Updated featured flag.
    pub is_featured: Option<bool>,
}
