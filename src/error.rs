//! Error types for the product API
//!
//! Provides unified error handling using thiserror. The `Display` text keeps
//! internal detail for the logs; clients only ever see the fixed public message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == Api Error Enum ==
/// Unified error type for the product API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or wrong API key
    #[error("Unauthorized request")]
    Unauthorized,

    /// No product with the given id
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Payload failed the validation gate
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// No route matches the method and path
    #[error("No route for {0}")]
    RouteNotFound(String),

    /// Unexpected fault while handling a request
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    // == Public Message ==
    /// The message placed in the `error` field of the response body.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "Unauthorized. Missing or invalid API key.",
            ApiError::NotFound(_) => "Product not found",
            ApiError::InvalidPayload(_) => "Invalid or missing product fields",
            ApiError::RouteNotFound(_) => "Route not found",
            ApiError::Internal(_) => "Something went wrong on the server.",
        }
    }

    // == Status Code ==
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) | ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self, ApiError::Internal(_)) {
            error!("{}", self);
        }

        let body = Json(ErrorResponse::new(self.public_message()));
        (self.status(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the product API.
pub type Result<T> = std::result::Result<T, ApiError>;
