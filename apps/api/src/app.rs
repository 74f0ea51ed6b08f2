//! Router assembly for the Whipcast API

use axum::{
    http::{header, Method},
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::middleware::{security_headers, SecurityHeadersConfig};
use crate::models::ChannelEndpoints;
use crate::routes::{channels_router, health_router, not_found, ChannelsState};

/// Build the full application router from configuration
///
/// Routes:
/// - `GET /` - welcome text
/// - `POST /api/channels` - create a live channel
/// - `GET /health`, `GET /health/live` - health checks
pub fn build_app(config: &Config) -> Router {
    let channels_state = ChannelsState::new(ChannelEndpoints::from(config.stream()));
    let security_config = SecurityHeadersConfig::for_environment(config.environment());

    Router::new()
        .route("/", get(root))
        // Channel routes: /api/channels
        .nest("/api", channels_router(channels_state))
        // Nested health routes: /health, /health/live
        .nest("/health", health_router())
        .fallback(not_found)
        .layer(from_fn_with_state(security_config, security_headers))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(config))
}

/// Build the CORS layer based on configuration.
///
/// In production mode:
/// - If `CORS_ORIGINS` is set, only those origins are allowed
/// - If `CORS_ORIGINS` is not set, CORS requests are rejected
///
/// In development mode:
/// - If `CORS_ORIGINS` is set, those origins are used
/// - If `CORS_ORIGINS` is not set, permissive CORS is used
fn build_cors_layer(config: &Config) -> CorsLayer {
    match &config.cors_allowed_origins {
        Some(origins) if !origins.is_empty() => {
            let allowed_origins: Vec<_> = origins
                .iter()
                .filter_map(|origin| {
                    origin.parse().ok().or_else(|| {
                        tracing::warn!("Invalid CORS origin '{}', skipping", origin);
                        None
                    })
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::error!("No valid CORS origins configured, CORS requests will be rejected");
                CorsLayer::new()
            } else {
                tracing::info!(
                    "CORS configured with {} allowed origin(s): {:?}",
                    allowed_origins.len(),
                    origins
                );
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
                    .max_age(std::time::Duration::from_secs(3600))
            }
        }
        _ if config.is_production() => {
            tracing::warn!(
                "CORS_ORIGINS not configured in production mode. \
                 CORS requests will be rejected. Set CORS_ORIGINS to allow cross-origin requests."
            );
            CorsLayer::new()
        }
        _ => {
            tracing::warn!(
                "Using permissive CORS in development mode. \
                 Set CORS_ORIGINS for production-like behavior."
            );
            CorsLayer::permissive()
        }
    }
}

async fn root() -> &'static str {
    "Welcome to Whipcast - Live Channels over WebRTC"
}
