// Workflow constants (no magic values)
use crate::domain::RecordType;
use std::time::Duration;

/// Delay between two job status queries (2s)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Give up on a job after this long (10 minutes)
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(600);

/// Name prefix of the domain created by the companion "create domains" tooling
pub const DEFAULT_DOMAIN_PREFIX: &str = "alt-jclouds-example.com";

/// Record type targeted for deletion
pub const DEFAULT_RECORD_TYPE: RecordType = RecordType::TXT;
