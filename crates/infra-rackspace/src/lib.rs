// CloudDNS Infrastructure - Rackspace Adapter
// Implements: DnsApi, JobStatusSource over Identity v2.0 + Cloud DNS v1.0

mod auth;
mod client;
mod config;
mod error;
mod wire;

pub use auth::Session;
pub use client::RackspaceDnsClient;
pub use config::{Credentials, RackspaceConfig, Region};
pub use error::RackspaceError;

// Note: RackspaceError -> AppError conversion lives in error.rs; the reverse
// direction is never needed because core does not know about this crate.
