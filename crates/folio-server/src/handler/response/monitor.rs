//! Health monitoring response types.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

/// System health snapshot.
#[must_use]
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// Whether the server and its database are healthy.
    pub is_healthy: bool,
    /// Size of the database connection pool.
    pub pool_size: usize,
    /// Connections currently available in the pool.
    pub available_connections: usize,
    /// Pool utilization in the 0.0-1.0 range.
    pub pool_utilization: f64,
    /// When this snapshot was taken.
    pub updated_at: OffsetDateTime,
}
