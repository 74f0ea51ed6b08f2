//! Security headers middleware for the Whipcast API
//!
//! The API only ever returns JSON or plain text, so the policies here are
//! strict: nothing may be framed, sniffed, or loaded from a response.
//!
//! Headers added:
//! - X-Frame-Options
//! - X-Content-Type-Options
//! - Referrer-Policy
//! - Content-Security-Policy
//! - Permissions-Policy
//! - Strict-Transport-Security (HTTPS requests in production only)

use axum::{
    body::Body,
    extract::State,
    http::{header::HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use whipcast_shared_config::Environment;

static X_FRAME_OPTIONS: HeaderName = HeaderName::from_static("x-frame-options");
static X_CONTENT_TYPE_OPTIONS: HeaderName = HeaderName::from_static("x-content-type-options");
static REFERRER_POLICY: HeaderName = HeaderName::from_static("referrer-policy");
static CONTENT_SECURITY_POLICY: HeaderName = HeaderName::from_static("content-security-policy");
static PERMISSIONS_POLICY: HeaderName = HeaderName::from_static("permissions-policy");
static STRICT_TRANSPORT_SECURITY: HeaderName = HeaderName::from_static("strict-transport-security");

/// One year, in seconds
const DEFAULT_HSTS_MAX_AGE: u64 = 31_536_000;

/// Configuration for security headers middleware
#[derive(Debug, Clone)]
pub struct SecurityHeadersConfig {
    /// Whether to send Strict-Transport-Security on HTTPS requests
    pub enable_hsts: bool,

    /// HSTS max-age in seconds
    pub hsts_max_age: u64,
}

impl Default for SecurityHeadersConfig {
    fn default() -> Self {
        Self {
            enable_hsts: false,
            hsts_max_age: DEFAULT_HSTS_MAX_AGE,
        }
    }
}

impl SecurityHeadersConfig {
    /// HSTS is only enabled in production
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            enable_hsts: environment.is_production(),
            ..Self::default()
        }
    }

    fn hsts_value(&self) -> String {
        format!("max-age={}; includeSubDomains", self.hsts_max_age)
    }
}

/// Add security headers to every response
///
/// # Example
///
/// ```ignore
/// let app = Router::new()
///     .route("/", get(handler))
///     .layer(middleware::from_fn_with_state(config, security_headers));
/// ```
pub async fn security_headers(
    State(config): State<SecurityHeadersConfig>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let is_https = is_https_request(&request);

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS.clone(), HeaderValue::from_static("DENY"));
    headers.insert(
        X_CONTENT_TYPE_OPTIONS.clone(),
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        REFERRER_POLICY.clone(),
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        CONTENT_SECURITY_POLICY.clone(),
        HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'"),
    );
    headers.insert(
        PERMISSIONS_POLICY.clone(),
        HeaderValue::from_static("camera=(), microphone=(), geolocation=(), payment=(), usb=()"),
    );

    // RFC 6797: HSTS on plain HTTP responses is ignored by browsers.
    if config.enable_hsts && is_https {
        if let Ok(value) = HeaderValue::from_str(&config.hsts_value()) {
            headers.insert(STRICT_TRANSPORT_SECURITY.clone(), value);
        }
    }

    response
}

/// Check `x-forwarded-proto` first (TLS terminated at a proxy), then the URI scheme
fn is_https_request(request: &Request<Body>) -> bool {
    if let Some(proto) = request.headers().get("x-forwarded-proto") {
        if let Ok(proto_str) = proto.to_str() {
            return proto_str.eq_ignore_ascii_case("https");
        }
    }

    request
        .uri()
        .scheme_str()
        .is_some_and(|s| s.eq_ignore_ascii_case("https"))
}
