//! Live channel HTTP route handlers
//!
//! Provides endpoints for channel management:
//! - `POST /channels` - Create a channel and return its WHIP/WHEP endpoints

use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;

use crate::models::ChannelEndpoints;

/// Shared application state for channel handlers
#[derive(Clone)]
pub struct ChannelsState {
    /// Endpoints handed out for every new channel
    pub endpoints: Arc<ChannelEndpoints>,
}

impl ChannelsState {
    /// Create new channel state
    pub fn new(endpoints: ChannelEndpoints) -> Self {
        Self {
            endpoints: Arc::new(endpoints),
        }
    }
}

/// Create channel router
pub fn channels_router(state: ChannelsState) -> Router {
    Router::new()
        .route("/channels", post(create_channel))
        .with_state(state)
}

/// Create a live channel
///
/// The request body and headers are not read. Every call returns the
/// configured hosted live input endpoints; no upstream resource is
/// provisioned.
///
/// # Response
/// - 200 OK with `{"whipUrl": "...", "whepUrl": "..."}`
pub async fn create_channel(State(state): State<ChannelsState>) -> Json<ChannelEndpoints> {
    tracing::debug!(whip_url = %state.endpoints.whip_url, "Channel endpoints issued");
    Json(state.endpoints.as_ref().clone())
}
