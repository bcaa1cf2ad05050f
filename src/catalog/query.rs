//! Query Engine Module
//!
//! Filters and paginates a snapshot of the catalogue. Steps always run in the
//! same order: category, then name search, then page slicing.

use crate::catalog::Product;

// == Product Query ==
/// Parsed list parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Case-insensitive category equality filter
    pub category: Option<String>,
    /// Case-insensitive substring match on the name
    pub search: Option<String>,
    /// 1-based page number, defaults to 1
    pub page: Option<i64>,
    /// Page size, defaults to the whole filtered result
    pub limit: Option<i64>,
}

impl ProductQuery {
    /// Builds a query from raw parameter strings.
    ///
    /// Empty `category` and `search` values are treated as absent, as are
    /// `page` and `limit` values that are zero or do not start with an integer.
    pub fn from_params(
        category: Option<String>,
        search: Option<String>,
        page: Option<&str>,
        limit: Option<&str>,
    ) -> Self {
        Self {
            category: category.filter(|s| !s.is_empty()),
            search: search.filter(|s| !s.is_empty()),
            page: page.and_then(parse_int),
            limit: limit.and_then(parse_int),
        }
    }
}

// == Apply ==
/// Runs the query against a product snapshot.
///
/// Never fails: the page window is clamped to the filtered result, so a page
/// past the end or a negative window yields an empty result.
pub fn apply<'a, I>(products: I, query: &ProductQuery) -> Vec<Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let category = query
        .category
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);
    let search = query
        .search
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let filtered: Vec<_> = products
        .into_iter()
        .filter(|p| match &category {
            Some(c) => p.category.to_lowercase() == *c,
            None => true,
        })
        .filter(|p| match &search {
            Some(s) => p.name.to_lowercase().contains(s.as_str()),
            None => true,
        })
        .cloned()
        .collect();

    // i128 holds any product of two i64 values
    let len = filtered.len() as i128;
    let page = i128::from(query.page.unwrap_or(1));
    let limit = query.limit.map_or(len, i128::from);
    let start = ((page - 1) * limit).clamp(0, len) as usize;
    let end = (page * limit).clamp(0, len) as usize;

    if start >= end {
        return Vec::new();
    }
    filtered[start..end].to_vec()
}

/// Reads a leading, optionally signed integer, ignoring zero and non-numbers.
///
/// Values too large for an `i64` saturate.
fn parse_int(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let value = match digits.parse::<i64>() {
        Ok(n) if negative => -n,
        Ok(n) => n,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    };
    Some(value).filter(|n| *n != 0)
}
