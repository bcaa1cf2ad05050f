//! Catalog Module
//!
//! In-memory product catalogue: the store, the query engine, the write-time
//! validation gate and aggregate statistics.

mod product;
pub mod query;
pub mod stats;
mod store;
pub mod validation;


// Re-export public types
pub use product::{sample_products, Product, ProductFields};
pub use query::ProductQuery;
pub use stats::category_counts;
pub use store::ProductStore;
pub use validation::validate;
