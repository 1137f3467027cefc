//! The executor tying the dispatch pipeline together.
//!
//! [`ApiClient`] owns the immutable configuration and a transport, and runs
//! every call through the same sequence: validate, build, send, interpret.
//! There is no shared mutable state, so concurrent calls are fully
//! independent.

use crate::config::VultrConfig;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::params::Params;
use crate::transport::{HttpTransport, Transport};
use crate::{request, response, validate};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

/// Shared executor behind every resource namespace.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<VultrConfig>,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Build an executor with an HTTP transport derived from `config`.
    ///
    /// The API key is deliberately not checked here; it is validated per
    /// call so a key-less client fails on first use, not at construction.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ConfigError`] when the configuration is
    /// invalid or the HTTP client cannot be built.
    pub fn new(config: VultrConfig) -> Result<Self> {
        config.validate().map_err(crate::Error::from)?;
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        })
    }

    /// Build an executor around a caller-supplied transport.
    #[must_use]
    pub fn with_transport(config: VultrConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// Access the configuration.
    #[must_use]
    pub fn config(&self) -> &VultrConfig {
        &self.config
    }

    /// Run one call through the full pipeline.
    ///
    /// Resolves to the parsed response body, or `None` for an empty success
    /// body.
    ///
    /// # Errors
    ///
    /// Validation and build failures surface before any network I/O;
    /// transport and classification failures after.
    pub async fn execute(&self, endpoint: &Endpoint, params: &Params) -> Result<Option<Value>> {
        validate::validate(
            endpoint,
            params,
            self.config.api_key(),
            self.config.unknown_params,
        )?;
        let request = request::build(endpoint, params, &self.config)?;

        info!(method = %request.method, url = %request.url, "dispatching API request");
        let raw = self.transport.send(&request).await?;
        debug!(status = raw.status, bytes = raw.body.len(), "received API response");

        response::interpret(&raw)
    }
}
