//! Bearer-token authentication for the admin surface.
//!
//! The site has a single administrator, so admin routes are guarded by one
//! static bearer token configured at startup rather than user accounts.

use axum::extract::{FromRef, FromRequestParts, OptionalFromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::handler::{Error, ErrorKind};
use crate::service::AdminToken;

const TRACING_TARGET: &str = "folio_server::admin_auth";

/// Proof that the request carried a valid admin bearer token.
///
/// Extraction fails with `401` when the `Authorization` header is missing,
/// not of the `Bearer <token>` form, or does not match the configured token.
/// Use `Option<AdminAuth>` on routes where admin access is elective: the
/// optional extractor yields `None` for an absent header but still rejects a
/// present-but-invalid one.
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct AdminAuth;

/// Parses the bearer token out of an `Authorization` header value.
fn bearer_token(header: &str) -> Option<&str> {
    let token = header.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}

fn verify(parts: &Parts, admin_token: &AdminToken) -> Result<AdminAuth, Error<'static>> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or_else(|| ErrorKind::MissingAuthToken.into_error())?;

    let header = header.to_str().map_err(|_| {
        ErrorKind::MalformedAuthToken.with_message("Authorization header is not valid UTF-8")
    })?;

    let token = bearer_token(header).ok_or_else(|| {
        ErrorKind::MalformedAuthToken
            .with_message("Authorization header must use the 'Bearer <token>' scheme")
    })?;

    if !admin_token.matches(token) {
        tracing::warn!(target: TRACING_TARGET, "rejected invalid admin token");
        return Err(ErrorKind::Unauthorized.into_error());
    }

    Ok(AdminAuth)
}

impl<S> FromRequestParts<S> for AdminAuth
where
    S: Send + Sync,
    AdminToken: FromRef<S>,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let admin_token = AdminToken::from_ref(state);
        verify(parts, &admin_token)
    }
}

impl<S> OptionalFromRequestParts<S> for AdminAuth
where
    S: Send + Sync,
    AdminToken: FromRef<S>,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        if !parts.headers.contains_key(AUTHORIZATION) {
            return Ok(None);
        }

        let admin_token = AdminToken::from_ref(state);
        verify(parts, &admin_token).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    fn parts_with_header(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = value {
            builder = builder.header(AUTHORIZATION, value);
        }
        let (parts, ()) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[test]
    fn bearer_token_parsing() {
        assert_eq!(bearer_token("Bearer secret"), Some("secret"));
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Basic secret"), None);
        assert_eq!(bearer_token("secret"), None);
    }

    #[test]
    fn missing_header_is_rejected() {
        let token = AdminToken::new("folio-dev-admin-token");
        let parts = parts_with_header(None);

        let error = verify(&parts, &token).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingAuthToken);
    }

    #[test]
    fn malformed_header_is_rejected() {
        let token = AdminToken::new("folio-dev-admin-token");
        let parts = parts_with_header(Some("Token abc"));

        let error = verify(&parts, &token).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MalformedAuthToken);
    }

    #[test]
    fn wrong_token_is_rejected() {
        let token = AdminToken::new("folio-dev-admin-token");
        let parts = parts_with_header(Some("Bearer wrong-token"));

        let error = verify(&parts, &token).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn valid_token_is_accepted() {
        let token = AdminToken::new("folio-dev-admin-token");
        let parts = parts_with_header(Some("Bearer folio-dev-admin-token"));

        assert!(verify(&parts, &token).is_ok());
    }
}
