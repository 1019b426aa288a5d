// Job Status Port (Interface)

use crate::domain::{JobHandle, JobStatusReport};
use crate::error::Result;
use async_trait::async_trait;

/// Source of job status observations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobStatusSource: Send + Sync {
    /// Query the current status of a submitted job
    async fn job_status(&self, job: &JobHandle) -> Result<JobStatusReport>;
}
