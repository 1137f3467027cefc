//! Request execution against the remote endpoint.
//!
//! The transport is purely mechanical: it sends a prepared
//! [`RequestDescriptor`] and hands back the raw status and body without
//! interpreting either. Classification happens in [`crate::response`].
//! There are no retries at this layer.

use crate::error::Result;
use crate::request::RequestDescriptor;
use async_trait::async_trait;
use reqwest::ClientBuilder;
use std::time::Duration;

/// Default idle timeout for pooled connections, in seconds.
pub const DEFAULT_POOL_IDLE_TIMEOUT: u64 = 90;

/// Default maximum idle connections per host.
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT: u64 = 10;

/// Uninterpreted HTTP outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text; may be empty.
    pub body: String,
}

/// Executes prepared requests.
///
/// Abstracted as a trait so the dispatch pipeline can be exercised in tests
/// without a live server.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return the raw outcome.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::Error::Timeout`] when the configured deadline is
    /// exceeded, [`crate::Error::Connection`] when the remote endpoint is
    /// unreachable, and [`crate::Error::Network`] for other I/O failures.
    async fn send(&self, request: &RequestDescriptor) -> Result<RawResponse>;
}

/// Transport backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport applying `timeout` to every request.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ConfigError`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = ClientBuilder::new()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT))
            .pool_idle_timeout(Duration::from_secs(DEFAULT_POOL_IDLE_TIMEOUT))
            .pool_max_idle_per_host(DEFAULT_POOL_MAX_IDLE_PER_HOST)
            .build()
            .map_err(|err| {
                crate::Error::ConfigError(format!("Failed to build HTTP client: {err}"))
            })?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &RequestDescriptor) -> Result<RawResponse> {
        let mut builder = self
            .http
            .request(request.method.clone(), request.url.clone());

        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}
