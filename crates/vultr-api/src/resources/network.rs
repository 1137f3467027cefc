//! Private network operations.

use serde_json::Value;
use vultr_core::endpoint::{Endpoint, HttpVerb};
use vultr_core::params::Params;
use vultr_core::{ApiClient, Result};

/// Create a private network in a region.
pub const CREATE: Endpoint = Endpoint::new(HttpVerb::Post, "/v1/network/create")
    .with_required(&["DCID"])
    .with_optional(&["description", "v4_subnet", "v4_subnet_mask"]);

/// Remove a private network.
pub const DESTROY: Endpoint =
    Endpoint::new(HttpVerb::Post, "/v1/network/destroy").with_required(&["NETWORKID"]);

/// List the private networks on the account.
pub const LIST: Endpoint = Endpoint::new(HttpVerb::Get, "/v1/network/list");

/// Handle for private network operations.
#[derive(Clone, Copy)]
pub struct NetworkApi<'a> {
    core: &'a ApiClient,
}

impl<'a> NetworkApi<'a> {
    pub(crate) fn new(core: &'a ApiClient) -> Self {
        Self { core }
    }

    /// Create a private network in the region given by `DCID`.
    pub async fn create(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&CREATE, &params).await
    }

    /// Destroy the private network identified by `NETWORKID`.
    ///
    /// All attached instances must be detached beforehand.
    pub async fn delete(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&DESTROY, &params).await
    }

    /// List private networks.
    pub async fn list(&self) -> Result<Option<Value>> {
        self.core.execute(&LIST, &Params::new()).await
    }
}
