//! Service health handlers.

use axum::extract::State;
use axum::http::StatusCode;
use folio_postgres::PgClient;
use time::OffsetDateTime;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::{ErrorResponse, HealthStatus};
use crate::service::ServiceState;

/// Tracing target for monitoring operations.
const TRACING_TARGET: &str = "folio_server::handler::monitors";

/// Reports the health of the service and its connection pool.
#[tracing::instrument(skip_all)]
#[utoipa::path(
    get, path = "/health", tag = "monitors",
    responses(
        (
            status = SERVICE_UNAVAILABLE,
            description = "Service is unhealthy",
            body = HealthStatus,
        ),
        (
            status = INTERNAL_SERVER_ERROR,
            description = "Internal server error",
            body = ErrorResponse,
        ),
        (
            status = OK,
            description = "Service is healthy",
            body = HealthStatus,
        ),
    ),
)]
async fn get_health(State(pg_client): State<PgClient>) -> Result<(StatusCode, Json<HealthStatus>)> {
    let pool_status = pg_client.pool_status();
    let is_healthy = pg_client.get_connection().await.is_ok();

    if !is_healthy {
        tracing::warn!(
            target: TRACING_TARGET,
            pool_size = pool_status.size,
            "Health check failed to acquire a connection",
        );
    }

    let health = HealthStatus {
        is_healthy,
        pool_size: pool_status.size,
        available_connections: pool_status.available,
        pool_utilization: pool_status.utilization(),
        updated_at: OffsetDateTime::now_utc(),
    };

    let status_code = if is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    Ok((status_code, Json(health)))
}

/// Returns a [`Router`] with all monitoring routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new().routes(routes!(get_health))
}

#[cfg(test)]
mod tests {
    use crate::handler::response::HealthStatus;
    use crate::handler::test::create_test_server;

    #[tokio::test]
    #[ignore = "requires a running Postgres"]
    async fn health_reports_pool_status() -> anyhow::Result<()> {
        let server = create_test_server().await?;

        let response = server.get("/health").await;
        response.assert_status_ok();

        let health = response.json::<HealthStatus>();
        assert!(health.is_healthy);
        assert!(health.pool_utilization <= 1.0);

        Ok(())
    }
}
