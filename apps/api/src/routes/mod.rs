//! HTTP route handlers for the Whipcast API
//!
//! This module contains all REST endpoint handlers including:
//! - Live channel endpoints
//! - Health check and status endpoints

pub mod channels;
pub mod health;

pub use channels::{channels_router, ChannelsState};
pub use health::health_router;

use axum::extract::OriginalUri;

use crate::error::ApiError;

/// Fallback for requests that match no route
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::not_found("route", uri.path())
}
