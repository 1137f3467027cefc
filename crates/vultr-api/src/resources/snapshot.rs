//! Snapshot operations.

use serde_json::Value;
use vultr_core::endpoint::{Endpoint, HttpVerb};
use vultr_core::params::Params;
use vultr_core::{ApiClient, Result};

/// Snapshot a running instance.
pub const CREATE: Endpoint = Endpoint::new(HttpVerb::Post, "/v1/snapshot/create")
    .with_required(&["SUBID"])
    .with_optional(&["description"]);

/// Remove a snapshot.
pub const DESTROY: Endpoint =
    Endpoint::new(HttpVerb::Post, "/v1/snapshot/destroy").with_required(&["SNAPSHOTID"]);

/// List the snapshots on the account.
pub const LIST: Endpoint = Endpoint::new(HttpVerb::Get, "/v1/snapshot/list");

/// Handle for snapshot operations.
#[derive(Clone, Copy)]
pub struct SnapshotApi<'a> {
    core: &'a ApiClient,
}

impl<'a> SnapshotApi<'a> {
    pub(crate) fn new(core: &'a ApiClient) -> Self {
        Self { core }
    }

    /// Snapshot the instance identified by `SUBID`.
    pub async fn create(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&CREATE, &params).await
    }

    /// Destroy the snapshot identified by `SNAPSHOTID`.
    pub async fn delete(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&DESTROY, &params).await
    }

    /// List snapshots.
    pub async fn list(&self) -> Result<Option<Value>> {
        self.core.execute(&LIST, &Params::new()).await
    }
}
