//! Resource namespaces of the v1 API.
//!
//! Each module declares its endpoints as constants and exposes a thin
//! handle whose methods run the shared dispatch pipeline. The handles hold
//! no state of their own; domain payloads pass through as structured JSON.

pub mod account;
pub mod app;
pub mod backup;
pub mod iso;
pub mod network;
pub mod os;
pub mod plan;
pub mod region;
pub mod server;
pub mod snapshot;
pub mod sshkey;
pub mod user;
