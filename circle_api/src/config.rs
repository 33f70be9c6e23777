//! API server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Canonical public URL of the site, used in documents and the sitemap.
pub const DEFAULT_SITE_URL: &str = "https://areaofcircle.com";

/// API server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub bind_addr: String,

    /// HTTP port
    pub port: u16,

    /// Public site URL, without trailing slash
    pub site_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            site_url: DEFAULT_SITE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// - `CIRCLE_API_BIND_ADDR` - interface to bind (default: 0.0.0.0)
    /// - `CIRCLE_API_PORT` - HTTP port (default: 3000)
    /// - `CIRCLE_SITE_URL` - public site URL (default: https://areaofcircle.com)
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("CIRCLE_API_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        if bind_addr.trim().is_empty() {
            return Err(ConfigError::InvalidValue("CIRCLE_API_BIND_ADDR".to_string()));
        }

        let port = match lookup("CIRCLE_API_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CIRCLE_API_PORT".to_string()))?,
            None => DEFAULT_PORT,
        };

        let site_url = lookup("CIRCLE_SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
        let site_url = site_url.trim().trim_end_matches('/').to_string();
        if !(site_url.starts_with("http://") || site_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue("CIRCLE_SITE_URL".to_string()));
        }

        Ok(ApiConfig {
            bind_addr,
            port,
            site_url,
        })
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
