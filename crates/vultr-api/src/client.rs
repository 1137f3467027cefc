//! Client entry point exposing the resource namespaces.

use crate::resources::account::AccountApi;
use crate::resources::app::AppApi;
use crate::resources::backup::BackupApi;
use crate::resources::iso::IsoApi;
use crate::resources::network::NetworkApi;
use crate::resources::os::OsApi;
use crate::resources::plan::PlanApi;
use crate::resources::region::RegionApi;
use crate::resources::server::ServerApi;
use crate::resources::snapshot::SnapshotApi;
use crate::resources::sshkey::SshKeyApi;
use crate::resources::user::UserApi;
use std::sync::Arc;
use vultr_core::transport::Transport;
use vultr_core::{ApiClient, Result, VultrConfig};

/// Asynchronous Vultr v1 API client.
///
/// All namespaces share one executor: the same immutable configuration and
/// pooled transport. The client is cheap to clone.
#[derive(Clone)]
pub struct VultrClient {
    core: ApiClient,
}

impl VultrClient {
    /// Build a client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`vultr_core::Error::ConfigError`] when the configuration is
    /// invalid. A missing API key is not an error here; it is reported by
    /// the first operation that needs it.
    pub fn new(config: VultrConfig) -> Result<Self> {
        Ok(Self {
            core: ApiClient::new(config)?,
        })
    }

    /// Build a client from `VULTR_API_KEY` and `VULTR_API_ENDPOINT`.
    ///
    /// # Errors
    ///
    /// Returns [`vultr_core::Error::ConfigError`] when the resulting
    /// configuration is invalid.
    pub fn from_env() -> Result<Self> {
        Self::new(VultrConfig::from_env())
    }

    /// Build a client around a caller-supplied transport.
    #[must_use]
    pub fn with_transport(config: VultrConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            core: ApiClient::with_transport(config, transport),
        }
    }

    /// Access the configuration.
    #[must_use]
    pub fn config(&self) -> &VultrConfig {
        self.core.config()
    }

    /// Account information operations.
    #[must_use]
    pub fn account(&self) -> AccountApi<'_> {
        AccountApi::new(&self.core)
    }

    /// One-click application catalog operations.
    #[must_use]
    pub fn app(&self) -> AppApi<'_> {
        AppApi::new(&self.core)
    }

    /// Backup listing operations.
    #[must_use]
    pub fn backup(&self) -> BackupApi<'_> {
        BackupApi::new(&self.core)
    }

    /// ISO image operations.
    #[must_use]
    pub fn iso(&self) -> IsoApi<'_> {
        IsoApi::new(&self.core)
    }

    /// Private network operations.
    #[must_use]
    pub fn network(&self) -> NetworkApi<'_> {
        NetworkApi::new(&self.core)
    }

    /// Operating system catalog operations.
    #[must_use]
    pub fn os(&self) -> OsApi<'_> {
        OsApi::new(&self.core)
    }

    /// Plan catalog operations.
    #[must_use]
    pub fn plan(&self) -> PlanApi<'_> {
        PlanApi::new(&self.core)
    }

    /// Region catalog operations.
    #[must_use]
    pub fn region(&self) -> RegionApi<'_> {
        RegionApi::new(&self.core)
    }

    /// Virtual machine operations.
    #[must_use]
    pub fn server(&self) -> ServerApi<'_> {
        ServerApi::new(&self.core)
    }

    /// Snapshot operations.
    #[must_use]
    pub fn snapshot(&self) -> SnapshotApi<'_> {
        SnapshotApi::new(&self.core)
    }

    /// SSH key operations.
    #[must_use]
    pub fn sshkey(&self) -> SshKeyApi<'_> {
        SshKeyApi::new(&self.core)
    }

    /// Sub-user management operations.
    #[must_use]
    pub fn user(&self) -> UserApi<'_> {
        UserApi::new(&self.core)
    }
}
