// Asynchronous Job Domain Model
//
// A job is created by the provider for every mutating call. This crate never
// owns a job's state: it only observes it through status reports.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Provider-assigned job identifier (opaque token)
pub type JobId = String;

/// Job Status as reported by the provider
///
/// Lifecycle: `Submitted -> Running -> {Completed, Errored}`.
/// A caller-side timeout is not a status; see `AppError::JobTimeout`.
///
/// Provider strings are mapped only through `from_provider`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    Submitted,
    Running,
    Completed,
    Errored,
    /// Status string this client does not recognise
    Unknown(String),
}

impl JobStatus {
    /// Map a provider status string
    ///
    /// Rackspace reports `INITIALIZED`, `RUNNING`, `COMPLETED` and `ERROR`.
    pub fn from_provider(raw: &str) -> Self {
        match raw.to_ascii_uppercase().as_str() {
            "INITIALIZED" => JobStatus::Submitted,
            "RUNNING" => JobStatus::Running,
            "COMPLETED" => JobStatus::Completed,
            "ERROR" => JobStatus::Errored,
            _ => JobStatus::Unknown(raw.to_string()),
        }
    }

    /// Completed or Errored
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Errored)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Submitted => write!(f, "SUBMITTED"),
            JobStatus::Running => write!(f, "RUNNING"),
            JobStatus::Completed => write!(f, "COMPLETED"),
            JobStatus::Errored => write!(f, "ERRORED"),
            JobStatus::Unknown(raw) => write!(f, "UNKNOWN({})", raw),
        }
    }
}

/// Handle returned by a mutating call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle {
    pub id: JobId,
    /// Status at submission time (usually `Submitted` or `Running`)
    pub status: JobStatus,
    pub callback_url: Option<String>,
}

impl JobHandle {
    pub fn new(id: impl Into<String>, status: JobStatus) -> Self {
        Self {
            id: id.into(),
            status,
            callback_url: None,
        }
    }
}

/// Error detail attached to an errored job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobErrorDetail {
    pub code: Option<u16>,
    pub message: String,
    pub details: Option<String>,
}

impl JobErrorDetail {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            details: None,
        }
    }

    /// Placeholder for an ERROR status that came without any error body
    pub fn unspecified() -> Self {
        Self::new("no error detail reported")
    }
}

impl std::fmt::Display for JobErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(code) = self.code {
            write!(f, "[{}] ", code)?;
        }
        write!(f, "{}", self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

/// One observation of a job's status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobStatusReport {
    pub job_id: JobId,
    pub status: JobStatus,
    pub error: Option<JobErrorDetail>,
}

impl JobStatusReport {
    pub fn new(job_id: impl Into<String>, status: JobStatus) -> Self {
        Self {
            job_id: job_id.into(),
            status,
            error: None,
        }
    }

    pub fn errored(job_id: impl Into<String>, detail: JobErrorDetail) -> Self {
        Self {
            job_id: job_id.into(),
            status: JobStatus::Errored,
            error: Some(detail),
        }
    }
}

/// Outcome of a job that reached `Completed`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCompletion {
    pub job_id: JobId,
    /// Number of status queries issued (at least 1)
    pub polls: u32,
    pub elapsed: Duration,
}
