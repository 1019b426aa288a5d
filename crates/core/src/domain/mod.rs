// Domain Layer - Provider entities as seen by the workflow

pub mod error;
pub mod job;
pub mod record;
pub mod zone;

// Re-exports
pub use error::DomainError;
pub use job::{JobCompletion, JobErrorDetail, JobHandle, JobId, JobStatus, JobStatusReport};
pub use record::{RecordDetail, RecordId, RecordType};
pub use zone::{Domain, DomainId};
