//! # vultr-core
//!
//! Generic request dispatch pipeline for the Vultr v1 API.
//!
//! Every resource namespace in the companion `vultr-api` crate is a table of
//! [`endpoint::Endpoint`] declarations wired through the same pipeline:
//! validation, request building, transport, and response interpretation.
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy and HTTP status classification
//! - [`config`] - Client configuration and environment loading
//! - [`endpoint`] - Declarative endpoint descriptions
//! - [`params`] - Call-argument maps handed to the pipeline
//! - [`validate`] - Pre-flight checks run before any network I/O
//! - [`request`] - Deterministic HTTP request construction
//! - [`transport`] - Request execution against the remote endpoint
//! - [`response`] - Raw HTTP outcome normalization
//! - [`client`] - The executor tying the pipeline together

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod params;
pub mod request;
pub mod response;
pub mod transport;
pub mod validate;

// Re-export commonly used types
pub use client::ApiClient;
pub use config::{UnknownParamPolicy, VultrConfig};
pub use endpoint::{Endpoint, HttpVerb};
pub use error::{ApiErrorKind, Error, Result};
pub use params::Params;
