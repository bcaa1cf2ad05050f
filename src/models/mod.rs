//! Request and Response models for the product API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies. Product
//! payloads themselves go through the catalog validation gate instead.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::ListQuery;
pub use responses::{DeleteResponse, ErrorResponse, WELCOME_MESSAGE};
