//! Account information operations.

use serde_json::Value;
use vultr_core::endpoint::{Endpoint, HttpVerb};
use vultr_core::params::Params;
use vultr_core::{ApiClient, Result};

/// Retrieve balance, pending charges, and payment details.
pub const INFO: Endpoint = Endpoint::new(HttpVerb::Get, "/v1/account/info");

/// Handle for account operations.
#[derive(Clone, Copy)]
pub struct AccountApi<'a> {
    core: &'a ApiClient,
}

impl<'a> AccountApi<'a> {
    pub(crate) fn new(core: &'a ApiClient) -> Self {
        Self { core }
    }

    /// Get account information.
    pub async fn info(&self) -> Result<Option<Value>> {
        self.core.execute(&INFO, &Params::new()).await
    }
}
