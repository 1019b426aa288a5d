// Job Awaiter - bounded polling of asynchronous provider jobs
use super::constants::{DEFAULT_MAX_WAIT, DEFAULT_POLL_INTERVAL};
use crate::domain::{JobCompletion, JobErrorDetail, JobHandle, JobStatus};
use crate::error::{AppError, Result};
use crate::port::JobStatusSource;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Polling policy: how often to ask, and for how long
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    interval: Duration,
    max_wait: Duration,
}

impl PollPolicy {
    /// Create a policy
    ///
    /// Fails with `AppError::Config` if either duration is zero, the
    /// interval is longer than the maximum wait, or the maximum wait does
    /// not fit on the clock.
    pub fn new(interval: Duration, max_wait: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(AppError::Config(
                "poll interval must be greater than zero".to_string(),
            ));
        }
        if max_wait.is_zero() {
            return Err(AppError::Config(
                "maximum wait must be greater than zero".to_string(),
            ));
        }
        if interval > max_wait {
            return Err(AppError::Config(format!(
                "poll interval ({:?}) exceeds maximum wait ({:?})",
                interval, max_wait
            )));
        }
        if Instant::now().checked_add(max_wait).is_none() {
            return Err(AppError::Config(format!(
                "maximum wait ({:?}) is out of range",
                max_wait
            )));
        }

        Ok(Self { interval, max_wait })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn max_wait(&self) -> Duration {
        self.max_wait
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_wait: DEFAULT_MAX_WAIT,
        }
    }
}

/// Waits for a submitted job to reach a terminal state
///
/// The first status query is issued immediately. Subsequent queries follow
/// every `interval`; the last sleep is shortened so that one final query
/// happens exactly at the deadline. Any status other than `Completed` or
/// `Errored` counts as still running.
#[derive(Debug, Clone, Default)]
pub struct JobAwaiter {
    policy: PollPolicy,
}

impl JobAwaiter {
    pub fn new(policy: PollPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> PollPolicy {
        self.policy
    }

    /// Block (asynchronously) until `job` completes, errors, or times out
    ///
    /// Returns:
    /// - `Ok(JobCompletion)` once the provider reports `Completed`
    /// - `AppError::JobFailed` once the provider reports `Errored`
    /// - `AppError::JobTimeout` if `max_wait` elapses first; `waited` is the
    ///   configured `max_wait`
    /// - any error from the status query itself, unchanged
    pub async fn await_complete<S>(&self, source: &S, job: &JobHandle) -> Result<JobCompletion>
    where
        S: JobStatusSource + ?Sized,
    {
        let started = Instant::now();
        let deadline = started.checked_add(self.policy.max_wait).ok_or_else(|| {
            AppError::Config(format!(
                "maximum wait ({:?}) is out of range",
                self.policy.max_wait
            ))
        })?;
        let mut polls: u32 = 0;

        debug!(
            job_id = %job.id,
            initial_status = %job.status,
            interval_ms = self.policy.interval.as_millis() as u64,
            max_wait_ms = self.policy.max_wait.as_millis() as u64,
            "Awaiting job"
        );

        loop {
            let report = source.job_status(job).await?;
            polls += 1;

            match report.status {
                JobStatus::Completed => {
                    let elapsed = started.elapsed();
                    info!(
                        job_id = %job.id,
                        polls = polls,
                        elapsed_ms = elapsed.as_millis() as u64,
                        "Job completed"
                    );
                    return Ok(JobCompletion {
                        job_id: job.id.clone(),
                        polls,
                        elapsed,
                    });
                }
                JobStatus::Errored => {
                    let detail = report.error.unwrap_or_else(JobErrorDetail::unspecified);
                    warn!(job_id = %job.id, error = %detail, "Job reported an error");
                    return Err(AppError::JobFailed {
                        job_id: job.id.clone(),
                        detail,
                    });
                }
                ref status => {
                    debug!(job_id = %job.id, status = %status, polls = polls, "Job still running");
                }
            }

            let now = Instant::now();
            if now >= deadline {
                warn!(
                    job_id = %job.id,
                    polls = polls,
                    elapsed_ms = (now - started).as_millis() as u64,
                    "Job did not reach a terminal state in time"
                );
                return Err(AppError::JobTimeout {
                    job_id: job.id.clone(),
                    waited: self.policy.max_wait,
                });
            }

            tokio::time::sleep(self.policy.interval.min(deadline - now)).await;
        }
    }
}
