//! API Module
//!
//! HTTP handlers, pipeline stages and routing for the product REST API.
//!
//! # Endpoints
//! - `GET /` - Welcome text
//! - `GET /api/products` - List, filter and paginate products
//! - `GET /api/products/stats` - Product count per category
//! - `GET /api/products/:id` - Fetch one product
//! - `POST /api/products` - Create a product
//! - `PUT /api/products/:id` - Replace a product
//! - `DELETE /api/products/:id` - Delete a product

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use handlers::*;
pub use middleware::API_KEY_HEADER;
pub use routes::create_router;
