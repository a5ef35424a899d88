//! Client configuration.
//!
//! The only process-level input is the backend origin; everything else has
//! a default matching the deployed site.
//!
//! ```ignore
//! let config = ClientConfig::from_env()?.with_stats_retries(5);
//! assert_eq!(config.endpoint("agents/3"), "https://api.example.com/api/agents/3");
//! ```

use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::container::Consistency;
use crate::error::ConfigError;

fn default_auth_cookie() -> String {
    ClientConfig::DEFAULT_AUTH_COOKIE.to_string()
}

fn default_stats_retries() -> u32 {
    ClientConfig::DEFAULT_STATS_RETRIES
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Scheme, host and optional port of the backend, without the `/api` prefix.
    pub origin: String,
    /// Cookie holding the bearer token for protected operations.
    #[serde(default = "default_auth_cookie")]
    pub auth_cookie: String,
    /// Immediate retries for dashboard statistics reads.
    #[serde(default = "default_stats_retries")]
    pub stats_retries: u32,
    /// Per-request timeout. `None` keeps the HTTP client's default.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default)]
    pub consistency: Consistency,
}

impl ClientConfig {
    pub const ORIGIN_ENV: &'static str = "REALTY_API_ORIGIN";
    pub const DEFAULT_AUTH_COOKIE: &'static str = "auth_token";
    pub const DEFAULT_STATS_RETRIES: u32 = 3;

    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            auth_cookie: default_auth_cookie(),
            stats_retries: default_stats_retries(),
            timeout_ms: None,
            consistency: Consistency::default(),
        }
    }

    /// Read the origin from `REALTY_API_ORIGIN`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let origin = std::env::var(Self::ORIGIN_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingOrigin(Self::ORIGIN_ENV))?;
        let config = Self::new(origin.trim());
        config.validate()?;
        Ok(config)
    }

    pub fn with_auth_cookie(mut self, name: impl Into<String>) -> Self {
        self.auth_cookie = name.into();
        self
    }

    pub fn with_stats_retries(mut self, retries: u32) -> Self {
        self.stats_retries = retries;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn with_consistency(mut self, consistency: Consistency) -> Self {
        self.consistency = consistency;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Check that the origin is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidOrigin {
            origin: self.origin.clone(),
            reason,
        };
        let url = Url::parse(&self.origin).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }

    /// Absolute URL for a resource-relative path: `<origin>/api/<path>`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/api/{}",
            self.origin.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
