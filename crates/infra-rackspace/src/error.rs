// Rackspace Adapter Error Types

use clouddns_core::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RackspaceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Cloud DNS API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Service catalog has no '{0}' endpoint")]
    MissingService(String),

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<RackspaceError> for AppError {
    fn from(err: RackspaceError) -> Self {
        match err {
            RackspaceError::Unauthorized(message) => AppError::Authentication(message),
            RackspaceError::Api { status, message } if status == 401 || status == 403 => {
                AppError::Authentication(message)
            }
            other => AppError::transport(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_maps_to_authentication() {
        let err: AppError = RackspaceError::Unauthorized("bad key".to_string()).into();
        assert!(matches!(err, AppError::Authentication(ref m) if m == "bad key"));
    }

    #[test]
    fn test_forbidden_api_error_maps_to_authentication() {
        let err: AppError = RackspaceError::Api {
            status: 403,
            message: "forbidden".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Authentication(_)));
    }

    #[test]
    fn test_other_errors_pass_through_as_transport() {
        let err: AppError = RackspaceError::Api {
            status: 503,
            message: "Service Unavailable".to_string(),
        }
        .into();

        match err {
            AppError::Transport(source) => {
                assert_eq!(
                    source.to_string(),
                    "Cloud DNS API error (503): Service Unavailable"
                );
            }
            other => panic!("expected Transport, got {:?}", other),
        }
    }
}
