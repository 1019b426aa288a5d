// Central Error Type for the Application

use crate::domain::{JobErrorDetail, JobId};
use std::time::Duration;
use thiserror::Error;

/// Boxed error raised by the API client collaborator
pub type TransportSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No domain with name prefix '{prefix}' found")]
    DomainNotFound { prefix: String },

    #[error("Job {job_id} failed: {detail}")]
    JobFailed {
        job_id: JobId,
        detail: JobErrorDetail,
    },

    #[error("Job {job_id} did not complete within {waited:?}")]
    JobTimeout { job_id: JobId, waited: Duration },

    #[error("Transport error: {0}")]
    Transport(#[source] TransportSource),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Wrap a collaborator failure without altering it
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        AppError::Transport(Box::new(err))
    }

    /// Outcomes the caller can anticipate and branch on (as opposed to fatal failures)
    pub fn is_expected(&self) -> bool {
        matches!(self, AppError::DomainNotFound { .. })
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
