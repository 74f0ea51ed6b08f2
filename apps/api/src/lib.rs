//! Whipcast API library
//!
//! This module exposes the core API components for use in integration tests
//! and as a library.

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use app::build_app;
pub use error::{ApiError, ErrorResponse};
pub use models::ChannelEndpoints;
