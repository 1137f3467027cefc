//! Plan catalog.

use serde_json::Value;
use vultr_core::endpoint::{Endpoint, HttpVerb};
use vultr_core::params::Params;
use vultr_core::{ApiClient, Result};

/// List all active plans, optionally filtered by type.
pub const LIST: Endpoint =
    Endpoint::new(HttpVerb::Get, "/v1/plans/list").with_optional(&["type"]);

/// List active cloud compute plans.
pub const LIST_VC2: Endpoint = Endpoint::new(HttpVerb::Get, "/v1/plans/list_vc2");

/// Handle for plan catalog operations.
#[derive(Clone, Copy)]
pub struct PlanApi<'a> {
    core: &'a ApiClient,
}

impl<'a> PlanApi<'a> {
    pub(crate) fn new(core: &'a ApiClient) -> Self {
        Self { core }
    }

    /// List plans. `type` may narrow the listing (all, vc2, dedicated, ...).
    pub async fn list(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&LIST, &params).await
    }

    /// List cloud compute plans.
    pub async fn list_vc2(&self) -> Result<Option<Value>> {
        self.core.execute(&LIST_VC2, &Params::new()).await
    }
}
