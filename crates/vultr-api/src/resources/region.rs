//! Region catalog and capacity checks.

use serde_json::Value;
use vultr_core::endpoint::{Endpoint, HttpVerb};
use vultr_core::params::Params;
use vultr_core::{ApiClient, Result};

/// List all regions.
pub const LIST: Endpoint =
    Endpoint::new(HttpVerb::Get, "/v1/regions/list").with_optional(&["availability"]);

/// List the plans available in one region.
pub const AVAILABILITY: Endpoint = Endpoint::new(HttpVerb::Get, "/v1/regions/availability")
    .with_required(&["DCID"])
    .with_optional(&["type"]);

/// Handle for region operations.
#[derive(Clone, Copy)]
pub struct RegionApi<'a> {
    core: &'a ApiClient,
}

impl<'a> RegionApi<'a> {
    pub(crate) fn new(core: &'a ApiClient) -> Self {
        Self { core }
    }

    /// List regions.
    pub async fn list(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&LIST, &params).await
    }

    /// List the plan ids currently deployable in the region given by `DCID`.
    pub async fn availability(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&AVAILABILITY, &params).await
    }
}
