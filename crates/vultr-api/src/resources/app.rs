//! One-click application catalog.

use serde_json::Value;
use vultr_core::endpoint::{Endpoint, HttpVerb};
use vultr_core::params::Params;
use vultr_core::{ApiClient, Result};

/// List the applications available for deployment.
pub const LIST: Endpoint = Endpoint::new(HttpVerb::Get, "/v1/app/list");

/// Handle for application catalog operations.
#[derive(Clone, Copy)]
pub struct AppApi<'a> {
    core: &'a ApiClient,
}

impl<'a> AppApi<'a> {
    pub(crate) fn new(core: &'a ApiClient) -> Self {
        Self { core }
    }

    /// List deployable one-click applications.
    pub async fn list(&self) -> Result<Option<Value>> {
        self.core.execute(&LIST, &Params::new()).await
    }
}
