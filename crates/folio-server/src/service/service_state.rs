//! Application state and dependency injection.

use std::fmt;
use std::sync::Arc;

use folio_postgres::PgClient;

use crate::service::{Result, ServiceConfig};

/// Bearer token that guards the admin surface.
///
/// Cheap to clone; used by the admin extractor to check the
/// `Authorization` header of incoming requests.
#[derive(Clone)]
pub struct AdminToken(Arc<str>);

impl AdminToken {
    /// Creates a new admin token.
    pub fn new(token: impl Into<Arc<str>>) -> Self {
        Self(token.into())
    }

    /// Returns whether the presented token matches the configured one.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.as_ref() == candidate
    }
}

impl fmt::Debug for AdminToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminToken(***)")
    }
}

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    pg_client: PgClient,
    admin_token: AdminToken,
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// Connects to the database and applies any pending migrations.
    pub async fn from_config(config: &ServiceConfig) -> Result<Self> {
        let service_state = Self {
            pg_client: config.connect_postgres().await?,
            admin_token: AdminToken::new(config.admin_token.as_str()),
        };

        Ok(service_state)
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(pg_client: PgClient);
impl_di!(admin_token: AdminToken);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_token_matches_exactly() {
        let token = AdminToken::new("folio-dev-admin-token");
        assert!(token.matches("folio-dev-admin-token"));
        assert!(!token.matches("folio-dev-admin-tokeN"));
        assert!(!token.matches(""));
    }

    #[test]
    fn admin_token_debug_is_masked() {
        let token = AdminToken::new("super-secret-value");
        assert_eq!(format!("{:?}", token), "AdminToken(***)");
    }
}
