//! Virtual machine operations.

use serde_json::Value;
use vultr_core::endpoint::{Endpoint, HttpVerb};
use vultr_core::params::Params;
use vultr_core::{ApiClient, Result};

/// List instances, optionally narrowed by id, tag, label, or main IP.
pub const LIST: Endpoint = Endpoint::new(HttpVerb::Get, "/v1/server/list")
    .with_optional(&["SUBID", "tag", "label", "main_ip"]);

/// Deploy a new instance.
pub const CREATE: Endpoint = Endpoint::new(HttpVerb::Post, "/v1/server/create")
    .with_required(&["DCID", "VPSPLANID", "OSID"])
    .with_optional(&[
        "ISOID",
        "SCRIPTID",
        "SNAPSHOTID",
        "APPID",
        "NETWORKID",
        "SSHKEYID",
        "FIREWALLGROUPID",
        "enable_ipv6",
        "enable_private_network",
        "label",
        "hostname",
        "tag",
        "userdata",
        "notify_activate",
        "ddos_protection",
        "auto_backups",
        "reserved_ip_v4",
    ]);

/// Destroy an instance.
pub const DESTROY: Endpoint =
    Endpoint::new(HttpVerb::Post, "/v1/server/destroy").with_required(&["SUBID"]);

/// Power on a stopped instance.
pub const START: Endpoint =
    Endpoint::new(HttpVerb::Post, "/v1/server/start").with_required(&["SUBID"]);

/// Hard reboot an instance.
pub const REBOOT: Endpoint =
    Endpoint::new(HttpVerb::Post, "/v1/server/reboot").with_required(&["SUBID"]);

/// Power off an instance without a graceful shutdown.
pub const HALT: Endpoint =
    Endpoint::new(HttpVerb::Post, "/v1/server/halt").with_required(&["SUBID"]);

/// Reinstall the operating system, destroying all data.
pub const REINSTALL: Endpoint =
    Endpoint::new(HttpVerb::Post, "/v1/server/reinstall").with_required(&["SUBID"]);

/// Set the text label of an instance.
pub const LABEL_SET: Endpoint =
    Endpoint::new(HttpVerb::Post, "/v1/server/label_set").with_required(&["SUBID", "label"]);

/// Handle for virtual machine operations.
#[derive(Clone, Copy)]
pub struct ServerApi<'a> {
    core: &'a ApiClient,
}

impl<'a> ServerApi<'a> {
    pub(crate) fn new(core: &'a ApiClient) -> Self {
        Self { core }
    }

    /// List instances on the account.
    pub async fn list(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&LIST, &params).await
    }

    /// Deploy an instance from a region, plan, and operating system.
    ///
    /// The resolved value carries the `SUBID` of the new instance;
    /// provisioning continues after the call returns.
    pub async fn create(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&CREATE, &params).await
    }

    /// Destroy the instance identified by `SUBID`.
    pub async fn delete(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&DESTROY, &params).await
    }

    /// Start a stopped instance.
    pub async fn start(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&START, &params).await
    }

    /// Hard reboot an instance.
    pub async fn reboot(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&REBOOT, &params).await
    }

    /// Power off an instance.
    pub async fn halt(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&HALT, &params).await
    }

    /// Reinstall the operating system on an instance.
    pub async fn reinstall(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&REINSTALL, &params).await
    }

    /// Set the label of an instance.
    pub async fn set_label(&self, params: Params) -> Result<Option<Value>> {
        self.core.execute(&LABEL_SET, &params).await
    }
}
