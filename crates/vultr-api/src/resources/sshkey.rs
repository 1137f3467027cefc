//! SSH key operations.

use serde_json::Value;
use vultr_core::endpoint::{Endpoint, HttpVerb};
use vultr_core::params::Params;
use vultr_core::{ApiClient, Result};

/// Register a public key under a display name.
pub const CREATE: Endpoint =
    Endpoint::new(HttpVerb::Post, "/v1/sshkey/create").with_required(&["name", "ssh_key"]);

/// Remove a registered key.
pub const DESTROY: Endpoint =
    Endpoint::new(HttpVerb::Post, "/v1/sshkey/destroy").with_required(&["SSHKEYID"]);

/// List registered keys.
pub const LIST: Endpoint = Endpoint::new(HttpVerb::Get, "/v1/sshkey/list");

/// Update the name or key material of a registered key.
pub const UPDATE: Endpoint = Endpoint::new(HttpVerb::Post, "/v1/sshkey/update")
    .with_required(&["SSHKEYID"])
    .with_optional(&["name", "ssh_key"]);

/// Handle for SSH key operations.
#[derive(Clone, Copy)]
pub struct SshKeyApi<'a> {
    core: &'a ApiClient,
}

impl<'a> SshKeyApi<'a> {
    pub(crate) fn new(core: &'a ApiClient) -> Self {
        Self { core }
    }

    /// Register an SSH key.
    pub async fn create(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&CREATE, &params).await
    }

    /// Remove the key identified by `SSHKEYID`.
    ///
    /// Instances already deployed with the key keep it.
    pub async fn delete(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&DESTROY, &params).await
    }

    /// List SSH keys.
    pub async fn list(&self) -> Result<Option<Value>> {
        self.core.execute(&LIST, &Params::new()).await
    }

    /// Update an SSH key.
    pub async fn update(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&UPDATE, &params).await
    }
}
