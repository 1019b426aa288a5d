// Application Layer - Use Cases

pub mod constants;
pub mod job_awaiter;
pub mod record_cleanup;

// Re-exports
pub use job_awaiter::{JobAwaiter, PollPolicy};
pub use record_cleanup::{DeletionReport, RecordCleanupService};
