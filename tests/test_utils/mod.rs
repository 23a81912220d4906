//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use axum::{Router, body::Body};

use policy_gateway::api::AppState;
use policy_gateway::api::app;
use policy_gateway::core::AppConfig;
use policy_gateway::gateway::Gateway;

/// Config pointing the gateway at `upstream_url`, typically a
/// `mockito` server.
pub fn test_config(upstream_url: &str) -> AppConfig {
    AppConfig::new(upstream_url, "http://localhost:2222")
}

/// Creates a test application router forwarding to `upstream_url`.
pub fn test_app(upstream_url: &str) -> Router {
    let config = test_config(upstream_url);
    let gateway = Gateway::from_config(&config).expect("Failed to build gateway");
    app(Arc::new(AppState::new(gateway)))
}

/// Serve the app on an ephemeral port and return its base URL.
pub async fn spawn_app(upstream_url: &str) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    let app = test_app(upstream_url);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}
