//! Project request types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a new portfolio project.
#[must_use]
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "slug": "folio",
    "name": "Folio",
    "summary": "Portfolio backend with a threaded blog",
    "techStack": ["rust", "axum", "postgres"],
    "isFeatured": true
}))]
pub struct CreateProject {
    /// URL-safe unique identifier for the project.
    #[validate(length(min = 1, max = 120))]
    pub slug: String,
    /// Project name.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Short summary shown in listings.
    #[serde(default)]
    #[validate(length(max = 500))]
    pub summary: Option<String>,
    /// Full project description.
    #[serde(default)]
    pub description: Option<String>,
    /// Source repository URL.
    #[serde(default)]
    #[validate(url)]
    pub repo_url: Option<String>,
    /// Live deployment URL.
    #[serde(default)]
    #[validate(url)]
    pub live_url: Option<String>,
    /// Technologies used, as free-form tags.
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Whether the project is pinned to the top of the listing.
    #[serde(default)]
    pub is_featured: bool,
}

/// Request payload for updating an existing project.
#[must_use]
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    /// Updated project name.
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    /// Updated summary.
    #[serde(default)]
    #[validate(length(max = 500))]
    pub summary: Option<String>,
    /// Updated description.
    #[serde(default)]
    pub description: Option<String>,
    /// Updated repository URL.
    #[serde(default)]
    #[validate(url)]
    pub repo_url: Option<String>,
    /// Updated live URL.
    #[serde(default)]
    #[validate(url)]
    pub live_url: Option<String>,
    /// Updated technology tags.
    #[serde(default)]
    pub tech_stack: Option<Vec<String>>,
    /// Updated featured flag.
    #[serde(default)]
    pub is_featured: Option<bool>,
}
