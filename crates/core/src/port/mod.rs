// Port Layer - Interfaces for external dependencies

pub mod dns_api;
pub mod job_status;

// Re-exports
pub use dns_api::DnsApi;
pub use job_status::JobStatusSource;

#[cfg(test)]
pub use job_status::MockJobStatusSource;
