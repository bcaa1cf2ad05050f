//! API Handlers
//!
//! HTTP request handlers for each product API endpoint.

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::{Method, StatusCode, Uri},
    Json,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::catalog::{category_counts, query, validate, Product, ProductStore};
use crate::error::{ApiError, Result};
use crate::models::{DeleteResponse, ListQuery, WELCOME_MESSAGE};

/// Application state shared across all handlers.
///
/// Contains the product store wrapped in Arc<RwLock<>> for thread-safe access
/// and the shared secret checked by the authentication stage.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe product store
    pub store: Arc<RwLock<ProductStore>>,
    /// Expected value of the `x-api-key` header
    pub api_key: Arc<str>,
}

impl AppState {
    /// Creates a new AppState with the given store and API key.
    pub fn new(store: ProductStore, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            api_key: api_key.into(),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Seeds the store with the sample catalogue unless disabled.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let store = if config.seed_samples {
            ProductStore::with_samples()
        } else {
            ProductStore::new()
        };
        Self::new(store, config.api_key.as_str())
    }
}

/// Handler for GET /
pub async fn welcome_handler() -> &'static str {
    WELCOME_MESSAGE
}

/// Handler for GET /api/products
///
/// Lists products after category filter, name search and pagination.
/// A query string that cannot be decoded is treated as empty.
pub async fn list_products_handler(
    State(state): State<AppState>,
    params: std::result::Result<Query<ListQuery>, QueryRejection>,
) -> Json<Vec<Product>> {
    let params = params.map(|Query(q)| q).unwrap_or_else(|rejection| {
        debug!("Ignoring undecodable query string: {}", rejection);
        ListQuery::default()
    });

    let store = state.store.read().await;
    Json(query::apply(store.list_all(), &params.into()))
}

/// Handler for GET /api/products/stats
///
/// Returns the number of products per lower-cased category.
pub async fn product_stats_handler(State(state): State<AppState>) -> Json<BTreeMap<String, usize>> {
    let store = state.store.read().await;
    Json(category_counts(store.list_all()))
}

/// Handler for GET /api/products/:id
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let store = state.store.read().await;
    store
        .find_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

/// Handler for POST /api/products
///
/// Validates the body and stores a new product under a fresh id.
pub async fn create_product_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>)> {
    let fields = validate(&json_body(payload)?)?;

    let mut store = state.store.write().await;
    let product = store.insert(fields);
    info!("Created product {}", product.id);

    Ok((StatusCode::CREATED, Json(product)))
}

/// Handler for PUT /api/products/:id
///
/// Replaces every field except the id. The body is validated before the
/// lookup, so a bad body is reported even for an unknown id.
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Product>> {
    let fields = validate(&json_body(payload)?)?;

    let mut store = state.store.write().await;
    let product = store.replace(&id, fields)?;
    info!("Updated product {}", product.id);

    Ok(Json(product))
}

/// Handler for DELETE /api/products/:id
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let mut store = state.store.write().await;
    let product = store.remove(&id)?;
    info!("Deleted product {}", product.id);

    Ok(Json(DeleteResponse::new(product)))
}

/// Fallback for requests no route matches.
pub async fn fallback_handler(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound(format!("{} {}", method, uri.path()))
}

/// Unwraps a JSON body, reporting unparseable bodies as invalid payloads.
fn json_body(payload: std::result::Result<Json<Value>, JsonRejection>) -> Result<Value> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::InvalidPayload(rejection.body_text()))
}
