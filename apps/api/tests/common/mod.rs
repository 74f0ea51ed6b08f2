//! Common test utilities for API integration tests
//!
//! Builds the real application router with a fixed configuration so tests
//! never depend on the process environment.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, Response},
    Router,
};
use tower::ServiceExt;

use whipcast_api::{build_app, config::Config};
use whipcast_shared_config::{Environment, StreamConfig};

pub const TEST_WHIP_URL: &str = "https://stream.example.com/live/abc123/webRTC/publish";
pub const TEST_WHEP_URL: &str = "https://stream.example.com/live/abc123/webRTC/play";

/// App configured with the built-in hosted endpoints
pub fn default_app() -> Router {
    build_app(&Config::new(Environment::Development, StreamConfig::default()))
}

/// App configured with the test endpoints above
pub fn test_app() -> Router {
    let stream = StreamConfig::with_urls(TEST_WHIP_URL, TEST_WHEP_URL).unwrap();
    build_app(&Config::new(Environment::Development, stream))
}

/// App for the given environment and `CORS_ORIGINS` list
pub fn cors_app(environment: Environment, origins: Option<&[&str]>) -> Router {
    let mut config = Config::new(environment, StreamConfig::default());
    config.cors_allowed_origins = origins.map(|list| list.iter().map(|o| o.to_string()).collect());
    build_app(&config)
}

/// Send a single request through a fresh copy of the router
pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(body)
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into bytes
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}
