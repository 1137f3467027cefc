//! Backup listing.

use serde_json::Value;
use vultr_core::endpoint::{Endpoint, HttpVerb};
use vultr_core::params::Params;
use vultr_core::{ApiClient, Result};

/// List backups, optionally filtered by instance or backup id.
pub const LIST: Endpoint =
    Endpoint::new(HttpVerb::Get, "/v1/backup/list").with_optional(&["SUBID", "BACKUPID"]);

/// Handle for backup operations.
#[derive(Clone, Copy)]
pub struct BackupApi<'a> {
    core: &'a ApiClient,
}

impl<'a> BackupApi<'a> {
    pub(crate) fn new(core: &'a ApiClient) -> Self {
        Self { core }
    }

    /// List backups on the account.
    pub async fn list(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&LIST, &params).await
    }
}
