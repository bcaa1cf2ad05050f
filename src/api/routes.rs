//! API Routes
//!
//! Configures the Axum router with all product API endpoints and the
//! request pipeline around them.

use axum::{middleware, routing::get, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_product_handler, delete_product_handler, fallback_handler, get_product_handler,
    list_products_handler, product_stats_handler, update_product_handler, welcome_handler,
    AppState,
};
use super::middleware::{handle_panic, log_request, require_api_key};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Welcome text, no key required
/// - `GET /api/products` - List with `category`, `search`, `page`, `limit`
/// - `GET /api/products/stats` - Product count per category
/// - `GET /api/products/:id` - Fetch one product
/// - `POST /api/products` - Create a product
/// - `PUT /api/products/:id` - Replace a product's fields
/// - `DELETE /api/products/:id` - Delete a product
///
/// # Pipeline
/// Outermost first: tracing, CORS, request log, panic catcher, then the API
/// key check. Only `GET /` skips the key check; every other request, the
/// unmatched fallback included, must carry the key before it is routed.
pub fn create_router(state: AppState) -> Router {
    let products = Router::new()
        .route(
            "/products",
            get(list_products_handler).post(create_product_handler),
        )
        .route("/products/stats", get(product_stats_handler))
        .route(
            "/products/:id",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        );

    let protected = Router::new()
        .nest("/api", products)
        .fallback(fallback_handler)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    let router = Router::new()
        .route("/", get(welcome_handler))
        .merge(protected);

    with_pipeline(router).with_state(state)
}

/// Wraps a router in the stages every request passes through.
fn with_pipeline(router: Router<AppState>) -> Router<AppState> {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(log_request))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(ProductStore::with_samples(), "test-key");
        create_router(state)
    }

    #[tokio::test]
    async fn test_root_needs_no_key() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_products_need_key() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/products")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_stats_route_wins_over_id() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/products/stats")
                    .header("x-api-key", "test-key")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_without_key() {
        let app = create_test_app();

        for uri in ["/nowhere", "/api/unknown", "/api/products/1/extra"] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_unknown_route_with_key() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/nowhere")
                    .header("x-api-key", "test-key")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_wrong_method_without_key() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri("/api/products/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_panicking_handler_becomes_500() {
        async fn explode() -> &'static str {
            panic!("handler blew up with secret detail")
        }

        let state = AppState::new(ProductStore::new(), "test-key");
        let app = with_pipeline(Router::new().route("/explode", get(explode))).with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/explode")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Something went wrong on the server.");
        assert!(!json.to_string().contains("secret"));
    }
}
