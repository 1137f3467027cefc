//! Sub-user management.

use serde_json::Value;
use vultr_core::endpoint::{Endpoint, HttpVerb};
use vultr_core::params::Params;
use vultr_core::{ApiClient, Result};

/// Create a sub-user with an access control list.
pub const CREATE: Endpoint = Endpoint::new(HttpVerb::Post, "/v1/user/create")
    .with_required(&["email", "name", "password", "acls"])
    .with_optional(&["api_enabled"]);

/// Remove a sub-user.
pub const DELETE: Endpoint =
    Endpoint::new(HttpVerb::Post, "/v1/user/delete").with_required(&["USERID"]);

/// List the sub-users on the account.
pub const LIST: Endpoint = Endpoint::new(HttpVerb::Get, "/v1/user/list");

/// Update a sub-user's details or permissions.
pub const UPDATE: Endpoint = Endpoint::new(HttpVerb::Post, "/v1/user/update")
    .with_required(&["USERID"])
    .with_optional(&["email", "name", "password", "acls", "api_enabled"]);

/// Handle for sub-user operations.
#[derive(Clone, Copy)]
pub struct UserApi<'a> {
    core: &'a ApiClient,
}

impl<'a> UserApi<'a> {
    pub(crate) fn new(core: &'a ApiClient) -> Self {
        Self { core }
    }

    /// Create a sub-user. `acls` is a list of permission names.
    pub async fn create(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&CREATE, &params).await
    }

    /// Delete the sub-user identified by `USERID`.
    pub async fn delete(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&DELETE, &params).await
    }

    /// List sub-users.
    pub async fn list(&self) -> Result<Option<Value>> {
        self.core.execute(&LIST, &Params::new()).await
    }

    /// Update a sub-user.
    pub async fn update(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&UPDATE, &params).await
    }
}
