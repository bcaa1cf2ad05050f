//! Request DTOs for the product API
//!
//! Defines the structure of incoming query strings.

use serde::Deserialize;

use crate::catalog::ProductQuery;

/// Query string for the list operation (GET /api/products)
///
/// Every parameter is optional and kept as raw text; malformed numbers are
/// dealt with when converting into a [`ProductQuery`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// Category to match, ignoring case
    pub category: Option<String>,
    /// Substring to look for in product names
    pub search: Option<String>,
    /// 1-based page number
    pub page: Option<String>,
    /// Page size
    pub limit: Option<String>,
}

impl From<ListQuery> for ProductQuery {
    fn from(raw: ListQuery) -> Self {
        ProductQuery::from_params(
            raw.category,
            raw.search,
            raw.page.as_deref(),
            raw.limit.as_deref(),
        )
    }
}
