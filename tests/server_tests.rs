//! End-to-end tests against a real listener.

use product_api::{create_router, AppState, Config};
use serde_json::{json, Value};

/// Serves the app on an ephemeral port and returns its base URL.
async fn spawn_server(config: &Config) -> String {
    let app = create_router(AppState::from_config(config));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_crud_over_http() {
    let config = Config::default();
    let base = spawn_server(&config).await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{}/api/products", base))
        .header("x-api-key", &config.api_key)
        .json(&json!({
            "name": "Blender",
            "description": "600W",
            "price": 79.99,
            "category": "Kitchen",
            "inStock": true
        }))
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let stats: Value = client
        .get(format!("{}/api/products/stats", base))
        .header("x-api-key", &config.api_key)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats, json!({"electronics": 2, "kitchen": 2}));

    let deleted = client
        .delete(format!("{}/api/products/{}", base, id))
        .header("x-api-key", &config.api_key)
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), reqwest::StatusCode::OK);

    let gone = client
        .get(format!("{}/api/products/{}", base, id))
        .header("x-api-key", &config.api_key)
        .send()
        .await
        .unwrap();
    assert_eq!(gone.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unseeded_server_with_custom_key() {
    let config = Config {
        api_key: "s3cret".to_string(),
        seed_samples: false,
        ..Default::default()
    };
    let base = spawn_server(&config).await;
    let client = reqwest::Client::new();

    let rejected = client
        .get(format!("{}/api/products", base))
        .header("x-api-key", "123456")
        .send()
        .await
        .unwrap();
    assert_eq!(rejected.status(), reqwest::StatusCode::UNAUTHORIZED);

    let products: Vec<Value> = client
        .get(format!("{}/api/products", base))
        .header("x-api-key", "s3cret")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(products.is_empty());
}
