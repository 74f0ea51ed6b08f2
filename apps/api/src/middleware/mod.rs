//! Middleware components for the Whipcast API
//!
//! - `security_headers`: adds security response headers to every route

pub mod security_headers;

pub use security_headers::{security_headers, SecurityHeadersConfig};
