//! Request Pipeline Stages
//!
//! Middleware run around the route handlers. Each stage either passes the
//! request on with `next.run` or answers it directly.

use std::any::Any;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use tracing::{info, warn};

use super::handlers::AppState;
use crate::error::ApiError;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Logs method, path and timestamp of every request, then continues.
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    info!(
        "[{}] {} {}",
        Utc::now().to_rfc3339(),
        req.method(),
        req.uri()
    );
    next.run(req).await
}

/// Rejects requests whose `x-api-key` header is absent or wrong.
pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let authorized = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|key| key == &*state.api_key);

    if !authorized {
        warn!("Rejected {} {}: missing or invalid API key", req.method(), req.uri());
        return Err(ApiError::Unauthorized);
    }
    Ok(next.run(req).await)
}

/// Turns a handler panic into a generic 500 response.
///
/// The panic message is logged, never returned.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(detail).into_response()
}
