//! Database error to HTTP error conversion.
//!
//! This module converts [`PgError`]s into HTTP responses, translating known
//! constraint violations into client errors with actionable messages and
//! everything else into opaque internal server errors.

use folio_postgres::PgError;
use folio_postgres::error::DieselError;

use crate::handler::{Error, ErrorKind};

const TRACING_TARGET: &str = "folio_server::postgres_errors";

/// Maps a named constraint violation onto a client-facing error.
///
/// Constraint names follow the Postgres defaults (`table_column_key`,
/// `table_column_fkey`), so renaming a constraint in a migration must be
/// reflected here.
fn constraint_error(constraint: &str) -> Option<Error<'static>> {
    let error = match constraint {
        "blog_posts_slug_key" => ErrorKind::Conflict
            .with_message("A blog post with this slug already exists")
            .with_resource("blog_post"),
        "projects_slug_key" => ErrorKind::Conflict
            .with_message("A project with this slug already exists")
            .with_resource("project"),
        "blog_comments_post_id_fkey" => ErrorKind::NotFound
            .with_message("The post for this comment no longer exists")
            .with_resource("blog_post"),
        "blog_comments_parent_comment_id_fkey" => ErrorKind::BadRequest
            .with_message("The parent comment no longer exists")
            .with_resource("blog_comment"),
        _ => return None,
    };

    Some(error)
}

impl From<PgError> for Error<'static> {
    fn from(error: PgError) -> Self {
        match error {
            PgError::Config(config_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %config_error,
                    "database configuration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Timeout(timeout) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    timeout = ?timeout,
                    "database timeout",
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Connection(connection_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %connection_error,
                    "database connection error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Migration(migration_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %migration_error,
                    "database migration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Query(ref query_error) => {
                if let Some(constraint_name) = error.constraint()
                    && let Some(mapped) = constraint_error(constraint_name)
                {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        constraint = constraint_name,
                        error = %query_error,
                        "query error (constraint violation)"
                    );
                    return mapped;
                }

                tracing::error!(
                    target: TRACING_TARGET,
                    error = %query_error,
                    "query error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Unexpected(unexpected_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %unexpected_error,
                    "unexpected database error"
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

// Used only for transactions.
impl From<DieselError> for Error<'static> {
    fn from(error: DieselError) -> Self {
        // Convert DieselError -> PgError -> Error
        let pg_error: PgError = error.into();
        pg_error.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_conflicts_map_to_conflict() {
        let error = constraint_error("blog_posts_slug_key").unwrap();
        assert_eq!(error.kind(), ErrorKind::Conflict);

        let error = constraint_error("projects_slug_key").unwrap();
        assert_eq!(error.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn missing_parent_maps_to_bad_request() {
        let error = constraint_error("blog_comments_parent_comment_id_fkey").unwrap();
        assert_eq!(error.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn unknown_constraints_are_not_mapped() {
        assert!(constraint_error("some_other_constraint").is_none());
    }
}
