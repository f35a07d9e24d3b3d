//! Page-based pagination query parameters.

use folio_postgres::query::Pagination;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

fn default_page() -> i64 {
    1
}

fn default_per_page() -> i64 {
    20
}

/// Page-based pagination for listing endpoints.
///
/// Converted into a limit/offset [`Pagination`] before hitting the
/// repository, which clamps out-of-range values.
#[must_use]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: i64,
    /// Number of items per page (1-100).
    #[serde(default = "default_per_page")]
    pub per_page: i64,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Pagination::from_page(params.page, params.per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_map_to_first_page() {
        let pagination: Pagination = PaginationParams::default().into();
        assert_eq!(pagination.limit, 20);
        assert_eq!(pagination.offset, 0);
    }

    #[test]
    fn later_pages_advance_the_offset() {
        let params = PaginationParams {
            page: 3,
            per_page: 10,
        };
        let pagination: Pagination = params.into();
        assert_eq!(pagination.limit, 10);
        assert_eq!(pagination.offset, 20);
    }
}
