//! # vultr-api
//!
//! Asynchronous client for the Vultr v1 HTTP API.
//!
//! Each resource namespace (servers, ISOs, networks, accounts, and so on)
//! is a table of endpoint declarations bound to the shared dispatch
//! pipeline from `vultr-core`. Responses pass through as structured JSON;
//! this crate does not interpret the domain payloads.
//!
//! ## Modules
//!
//! - [`client`] - The [`VultrClient`] entry point and namespace accessors
//! - [`resources`] - Endpoint catalogs and bound operations per namespace

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod resources;

pub use client::VultrClient;

// Re-export the pipeline surface callers interact with.
pub use vultr_core::params;
pub use vultr_core::params::Params;
pub use vultr_core::{
    ApiClient, ApiErrorKind, Endpoint, Error, HttpVerb, Result, UnknownParamPolicy, VultrConfig,
};

/// Build a client from the supplied configuration.
///
/// The API key may be absent at this point; every operation checks for it
/// and fails with [`Error::MissingApiKey`] before any network I/O when it
/// is still missing.
///
/// # Errors
///
/// Returns [`Error::ConfigError`] when the configuration is invalid.
pub fn initialize(config: VultrConfig) -> Result<VultrClient> {
    VultrClient::new(config)
}
