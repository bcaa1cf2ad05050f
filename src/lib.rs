//! Product API - An in-memory product catalogue over HTTP
//!
//! Provides CRUD, filtering, search, pagination and per-category statistics
//! behind a shared-secret API key.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;

pub use api::{create_router, AppState};
pub use config::Config;
