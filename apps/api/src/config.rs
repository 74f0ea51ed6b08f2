//! API server configuration

use std::env;

use anyhow::{Context, Result};
use whipcast_shared_config::{parse_env, CommonConfig, Environment, StreamConfig};

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration shared with other services
    pub common: CommonConfig,

    /// Server port (default: 8080)
    pub port: u16,

    /// CORS allowed origins (optional)
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Fails if `PORT`, `WHIP_URL` or `WHEP_URL` is set to an invalid value.
    pub fn from_env() -> Result<Self> {
        let common = CommonConfig::from_env().context("Failed to load config")?;

        if uses_hosted_defaults(&common) {
            tracing::warn!(
                "WHIP_URL/WHEP_URL not configured in production mode. \
                 Every channel will be served by the built-in hosted live input."
            );
        }

        Ok(Self {
            common,
            port: parse_env("PORT", 8080).context("Invalid PORT value")?,
            cors_allowed_origins: parse_origins(env::var("CORS_ORIGINS").ok()),
        })
    }

    /// Create a configuration from explicit parts (useful for testing)
    pub fn new(environment: Environment, stream: StreamConfig) -> Self {
        Self {
            common: CommonConfig {
                stream,
                environment,
            },
            port: 8080,
            cors_allowed_origins: None,
        }
    }

    /// Get stream endpoint configuration
    pub fn stream(&self) -> &StreamConfig {
        &self.common.stream
    }

    /// Get environment mode
    pub fn environment(&self) -> Environment {
        self.common.environment
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.common.environment.is_production()
    }
}

/// Production should never silently hand out the built-in hosted live input
fn uses_hosted_defaults(common: &CommonConfig) -> bool {
    common.environment.is_production() && common.stream.is_default()
}

fn parse_origins(raw: Option<String>) -> Option<Vec<String>> {
    raw.map(|s| {
        s.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use whipcast_shared_config::DEFAULT_WHIP_URL;

    // Mutex to ensure tests that modify environment variables don't run in parallel
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to temporarily set environment variables for a test
    struct EnvGuard {
        vars: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new(set: &[(&str, &str)], unset: &[&str]) -> Self {
            let mut vars = Vec::new();
            for (k, v) in set {
                vars.push((k.to_string(), env::var(k).ok()));
                env::set_var(k, v);
            }
            for k in unset {
                vars.push((k.to_string(), env::var(k).ok()));
                env::remove_var(k);
            }
            Self { vars }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (k, v) in &self.vars {
                match v {
                    Some(val) => env::set_var(k, val),
                    None => env::remove_var(k),
                }
            }
        }
    }

    const ALL_VARS: &[&str] = &["ENVIRONMENT", "PORT", "WHIP_URL", "WHEP_URL", "CORS_ORIGINS"];

    #[test]
    fn test_defaults() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let _guard = EnvGuard::new(&[], ALL_VARS);

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.environment(), Environment::Development);
        assert!(config.stream().is_default());
        assert_eq!(config.stream().whip_url, DEFAULT_WHIP_URL);
        assert!(config.cors_allowed_origins.is_none());
    }

    #[test]
    fn test_overrides() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let _guard = EnvGuard::new(
            &[
                ("ENVIRONMENT", "prod"),
                ("PORT", "9090"),
                ("WHIP_URL", "https://stream.example.com/live/publish"),
                ("WHEP_URL", "https://stream.example.com/live/play"),
                ("CORS_ORIGINS", "https://a.example, ,https://b.example"),
            ],
            &[],
        );

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 9090);
        assert!(config.is_production());
        assert_eq!(
            config.stream().whep_url,
            "https://stream.example.com/live/play"
        );
        assert_eq!(
            config.cors_allowed_origins,
            Some(vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ])
        );
    }

    #[test]
    fn test_hosted_defaults_flagged_only_in_production() {
        let custom = StreamConfig::with_urls(
            "https://stream.example.com/live/publish",
            "https://stream.example.com/live/play",
        )
        .unwrap();

        let prod_default = Config::new(Environment::Production, StreamConfig::default());
        let dev_default = Config::new(Environment::Development, StreamConfig::default());
        let staging_default = Config::new(Environment::Staging, StreamConfig::default());
        let prod_custom = Config::new(Environment::Production, custom);

        assert!(uses_hosted_defaults(&prod_default.common));
        assert!(!uses_hosted_defaults(&dev_default.common));
        assert!(!uses_hosted_defaults(&staging_default.common));
        assert!(!uses_hosted_defaults(&prod_custom.common));
    }

    #[test]
    fn test_invalid_port_fails() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let _guard = EnvGuard::new(&[("PORT", "eighty")], &["WHIP_URL", "WHEP_URL"]);

        let err = Config::from_env().unwrap_err();
        assert!(format!("{:#}", err).contains("PORT"));
    }

    #[test]
    fn test_invalid_whip_url_fails() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let _guard = EnvGuard::new(&[("WHIP_URL", "not a url")], &["PORT", "WHEP_URL"]);

        let err = Config::from_env().unwrap_err();
        assert!(format!("{:#}", err).contains("WHIP_URL"));
    }

    #[test]
    fn test_empty_url_falls_back_to_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let _guard = EnvGuard::new(&[("WHIP_URL", ""), ("WHEP_URL", "  ")], &["PORT"]);

        let config = Config::from_env().unwrap();
        assert!(config.stream().is_default());
    }
}
