//! Operating system catalog.

use serde_json::Value;
use vultr_core::endpoint::{Endpoint, HttpVerb};
use vultr_core::params::Params;
use vultr_core::{ApiClient, Result};

/// List the operating systems available for deployment.
pub const LIST: Endpoint = Endpoint::new(HttpVerb::Get, "/v1/os/list");

/// Handle for operating system catalog operations.
#[derive(Clone, Copy)]
pub struct OsApi<'a> {
    core: &'a ApiClient,
}

impl<'a> OsApi<'a> {
    pub(crate) fn new(core: &'a ApiClient) -> Self {
        Self { core }
    }

    /// List available operating systems.
    pub async fn list(&self) -> Result<Option<Value>> {
        self.core.execute(&LIST, &Params::new()).await
    }
}
