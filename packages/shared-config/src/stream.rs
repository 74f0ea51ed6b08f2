//! Live stream endpoint configuration types

use crate::{ConfigError, ConfigResult};
use std::env;
use url::Url;

/// Publish URL of the hosted live input used when `WHIP_URL` is not set
pub const DEFAULT_WHIP_URL: &str = "https://customer-vmoocz19hv6zb932.cloudflarestream.com/5bfd96a7323d3795bbf30afffb28a318kc27ade28e00b4e501c0a75c648d45580/webRTC/publish";

/// Playback URL of the hosted live input used when `WHEP_URL` is not set
pub const DEFAULT_WHEP_URL: &str =
    "https://customer-vmoocz19hv6zb932.cloudflarestream.com/c27ade28e00b4e501c0a75c648d45580/webRTC/play";

/// WHIP/WHEP endpoint configuration
///
/// URLs are validated but kept exactly as configured (after trimming), so
/// clients receive the same string the operator wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConfig {
    /// WHIP publish endpoint handed to broadcasters
    pub whip_url: String,

    /// WHEP playback endpoint handed to viewers
    pub whep_url: String,
}

impl StreamConfig {
    /// Load stream endpoint configuration from environment variables
    ///
    /// Unset or empty variables fall back to the built-in hosted endpoints.
    pub fn from_env() -> ConfigResult<Self> {
        Self::with_urls(
            &env_or_default("WHIP_URL", DEFAULT_WHIP_URL),
            &env_or_default("WHEP_URL", DEFAULT_WHEP_URL),
        )
    }

    /// Create a configuration from explicit URLs
    pub fn with_urls(whip_url: &str, whep_url: &str) -> ConfigResult<Self> {
        let whip_url = whip_url.trim();
        let whep_url = whep_url.trim();

        let whip = parse_endpoint_url("WHIP_URL", whip_url)?;
        let whep = parse_endpoint_url("WHEP_URL", whep_url)?;

        // Publishing and playback must never share an endpoint.
        if whip == whep {
            return Err(ConfigError::ValidationError(
                "WHIP_URL and WHEP_URL must point to different endpoints".to_string(),
            ));
        }

        Ok(Self {
            whip_url: whip_url.to_string(),
            whep_url: whep_url.to_string(),
        })
    }

    /// Check whether both endpoints are the built-in hosted ones
    pub fn is_default(&self) -> bool {
        self.whip_url == DEFAULT_WHIP_URL && self.whep_url == DEFAULT_WHEP_URL
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            whip_url: DEFAULT_WHIP_URL.to_string(),
            whep_url: DEFAULT_WHEP_URL.to_string(),
        }
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Parse an absolute http(s) endpoint URL, naming `name` in any error
pub fn parse_endpoint_url(name: &str, value: &str) -> ConfigResult<Url> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(name.to_string(), e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ConfigError::InvalidUrl(
                name.to_string(),
                format!("unsupported scheme '{}'", other),
            ))
        }
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(
            name.to_string(),
            "URL has no host".to_string(),
        ));
    }

    Ok(url)
}
