//! Configuration for Vultr API clients.
//!
//! A [`VultrConfig`] is created once, validated, and stays immutable for the
//! lifetime of the client built from it. The API key is optional at
//! construction time; its presence is checked per call so a key-less client
//! fails clearly on first use rather than at initialization.

use crate::error::Error;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.vultr.com";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "VULTR_API_KEY";

/// Environment variable overriding the base URL, intended for testing.
pub const BASE_URL_ENV: &str = "VULTR_API_ENDPOINT";

const fn default_request_timeout_secs() -> u64 {
    30
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Policy for call parameters not declared by the endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownParamPolicy {
    /// Pass undeclared parameters through unvalidated.
    ///
    /// The default: newer API parameters keep working with an older client.
    #[default]
    Forward,
    /// Fail the call before any I/O when an undeclared parameter is present.
    Reject,
}

/// Configuration for a Vultr client instance.
#[derive(Debug, Deserialize, Validate)]
pub struct VultrConfig {
    /// API key used for the `API-Key` request header
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Base URL of the remote API
    #[validate(url)]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// How to treat parameters an endpoint does not declare
    #[serde(default)]
    pub unknown_params: UnknownParamPolicy,
}

impl VultrConfig {
    /// Create a configuration pointing at the production API with no key.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            unknown_params: UnknownParamPolicy::default(),
        }
    }

    /// Load configuration from the environment.
    ///
    /// Reads the API key from `VULTR_API_KEY` and an optional base URL
    /// override from `VULTR_API_ENDPOINT`. Unset or empty variables leave
    /// the defaults in place.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                config.api_key = Some(SecretString::from(key));
            }
        }
        if let Ok(endpoint) = std::env::var(BASE_URL_ENV) {
            if !endpoint.is_empty() {
                config.base_url = endpoint;
            }
        }
        config
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Set the unknown-parameter policy.
    #[must_use]
    pub const fn with_unknown_params(mut self, policy: UnknownParamPolicy) -> Self {
        self.unknown_params = policy;
        self
    }

    /// Expose the configured API key, if any.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parse and validate the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_base_url(&self) -> Result<Url, Error> {
        Url::parse(&self.base_url)
            .map_err(|e| Error::ConfigError(format!("Invalid base URL: {e}")))
    }
}

impl Default for VultrConfig {
    fn default() -> Self {
        Self::new()
    }
}
