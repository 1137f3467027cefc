//! Private and public ISO image operations.

use serde_json::Value;
use vultr_core::endpoint::{Endpoint, HttpVerb};
use vultr_core::params::Params;
use vultr_core::{ApiClient, Result};

/// Create a private ISO by fetching it from a remote URL.
pub const CREATE_FROM_URL: Endpoint =
    Endpoint::new(HttpVerb::Post, "/v1/iso/create_from_url").with_required(&["url"]);

/// Remove a private ISO from the account.
pub const DESTROY: Endpoint =
    Endpoint::new(HttpVerb::Post, "/v1/iso/destroy").with_required(&["ISOID"]);

/// List the private ISOs on the account.
pub const LIST: Endpoint = Endpoint::new(HttpVerb::Get, "/v1/iso/list");

/// List the ISOs published by the platform.
pub const LIST_PUBLIC: Endpoint = Endpoint::new(HttpVerb::Get, "/v1/iso/list_public");

/// Handle for ISO operations.
#[derive(Clone, Copy)]
pub struct IsoApi<'a> {
    core: &'a ApiClient,
}

impl<'a> IsoApi<'a> {
    pub(crate) fn new(core: &'a ApiClient) -> Self {
        Self { core }
    }

    /// Fetch an ISO from `url` and store it as a private ISO.
    ///
    /// The download happens in the background; the resolved value carries
    /// the assigned `ISOID`.
    pub async fn create(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&CREATE_FROM_URL, &params).await
    }

    /// Destroy the private ISO identified by `ISOID`.
    pub async fn delete(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&DESTROY, &params).await
    }

    /// List private ISOs.
    pub async fn list(&self) -> Result<Option<Value>> {
        self.core.execute(&LIST, &Params::new()).await
    }

    /// List public ISOs.
    pub async fn list_public(&self) -> Result<Option<Value>> {
        self.core.execute(&LIST_PUBLIC, &Params::new()).await
    }
}
