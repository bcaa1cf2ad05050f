//! Catalogue Statistics
//!
//! Aggregate counts over the whole product collection.

use std::collections::BTreeMap;

use crate::catalog::Product;

// == Category Counts ==
/// Counts products per lower-cased category.
///
/// Keys come out sorted, so the JSON rendering is stable.
pub fn category_counts<'a, I>(products: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut counts = BTreeMap::new();
    for product in products {
        *counts.entry(product.category.to_lowercase()).or_insert(0) += 1;
    }
    counts
}
