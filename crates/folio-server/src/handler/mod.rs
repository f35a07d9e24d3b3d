//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use folio_server::handler::openapi_routes;
//! use folio_server::service::{ServiceConfig, ServiceState};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServiceConfig::default();
//! let state = ServiceState::from_config(&config).await?;
//!
//! let router: utoipa_axum::router::OpenApiRouter = openapi_routes().with_state(state);
//! let (app, _api) = router.split_for_parts();
//! # Ok(())
//! # }
//! ```
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod blog_comments;
mod blog_posts;
mod error;
mod monitors;
mod projects;
pub mod request;
mod response;
mod visitor_messages;

use axum::response::{IntoResponse, Response};
use utoipa_axum::router::OpenApiRouter;

pub use crate::handler::error::{Error, ErrorKind, Result};
use crate::service::ServiceState;

#[inline]
async fn handler() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns an [`OpenApiRouter`] with all routes.
pub fn openapi_routes() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new()
        .merge(blog_posts::routes())
        .merge(blog_comments::routes())
        .merge(projects::routes())
        .merge(visitor_messages::routes())
        .merge(monitors::routes())
        .fallback(handler)
}

#[cfg(test)]
mod test {
    use axum_test::TestServer;
    use serde_json::json;
    use uuid::Uuid;

    use crate::handler::openapi_routes;
    use crate::service::{ServiceConfig, ServiceState};

    /// Returns a new [`TestServer`] with the default router and state.
    pub async fn create_test_server() -> anyhow::Result<TestServer> {
        let _ = dotenvy::dotenv();

        let mut config = ServiceConfig::default();
        if let Ok(postgres_url) = std::env::var("POSTGRES_URL") {
            config.postgres.postgres_url = postgres_url;
        }

        let state = ServiceState::from_config(&config).await?;
        let app = openapi_routes().with_state(state);
        let (app, _) = app.split_for_parts();
        let server = TestServer::new(app)?;
        Ok(server)
    }

    /// Returns the `Authorization` header value for the default admin token.
    pub fn admin_bearer() -> String {
        let config = ServiceConfig::default();
        format!("Bearer {}", config.admin_token)
    }

    /// Creates a published post with a unique slug and returns the slug.
    pub async fn create_published_post(server: &TestServer) -> anyhow::Result<String> {
        let slug = format!("post-{}", Uuid::new_v4());
        let response = server
            .post("/blog")
            .add_header("authorization", admin_bearer())
            .json(&json!({
                "slug": slug,
                "title": "Test post",
                "content": "Test content.",
                "publish": true
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        Ok(slug)
    }

    #[tokio::test]
    #[ignore = "requires a running Postgres"]
    async fn handlers() -> anyhow::Result<()> {
        let server = create_test_server().await?;
        assert!(server.is_running());
        Ok(())
    }
}
