// Identity v2.0 authentication

use crate::config::RackspaceConfig;
use crate::error::RackspaceError;
use crate::wire::{
    fault_message, ApiKeyCredentials, AuthBody, AuthRequest, AuthResponse, CatalogEntry,
};
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

/// Service catalog type of Cloud DNS
const DNS_SERVICE_TYPE: &str = "rax:dns";

/// Service catalog name of Cloud DNS
const DNS_SERVICE_NAME: &str = "cloudDNS";

/// An authenticated Cloud DNS session
#[derive(Clone)]
pub struct Session {
    pub(crate) token: String,
    pub(crate) dns_endpoint: String,
    pub(crate) expires: Option<String>,
}

impl Session {
    /// Base URL of the Cloud DNS API (tenant-scoped, no trailing slash)
    pub fn dns_endpoint(&self) -> &str {
        &self.dns_endpoint
    }

    pub fn expires(&self) -> Option<&str> {
        self.expires.as_deref()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"******")
            .field("dns_endpoint", &self.dns_endpoint)
            .field("expires", &self.expires)
            .finish()
    }
}

/// Exchange username + API key for a token and the DNS endpoint
pub(crate) async fn authenticate(
    http: &Client,
    config: &RackspaceConfig,
) -> Result<Session, RackspaceError> {
    let url = format!("{}/tokens", config.identity_url.trim_end_matches('/'));
    debug!(url = %url, username = %config.credentials.username, "Authenticating");

    let body = AuthRequest {
        auth: AuthBody {
            api_key_credentials: ApiKeyCredentials {
                username: &config.credentials.username,
                api_key: &config.credentials.api_key,
            },
        },
    };

    let response = http.post(&url).json(&body).send().await?;
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        let text = response.text().await.unwrap_or_default();
        return Err(RackspaceError::Unauthorized(fault_message(&text)));
    }
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(RackspaceError::Api {
            status: status.as_u16(),
            message: fault_message(&text),
        });
    }

    let text = response.text().await?;
    let auth: AuthResponse = serde_json::from_str(&text)?;

    let dns_endpoint = match &config.dns_url {
        Some(url) => url.clone(),
        None => dns_endpoint(&auth.access.service_catalog)?,
    };
    let dns_endpoint = dns_endpoint.trim_end_matches('/').to_string();

    info!(dns_endpoint = %dns_endpoint, "Authenticated against Rackspace identity");

    Ok(Session {
        token: auth.access.token.id,
        dns_endpoint,
        expires: auth.access.token.expires,
    })
}

fn dns_endpoint(catalog: &[CatalogEntry]) -> Result<String, RackspaceError> {
    catalog
        .iter()
        .find(|entry| entry.service_type == DNS_SERVICE_TYPE || entry.name == DNS_SERVICE_NAME)
        .and_then(|entry| entry.endpoints.first())
        .map(|endpoint| endpoint.public_url.clone())
        .ok_or_else(|| RackspaceError::MissingService(DNS_SERVICE_TYPE.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog(value: serde_json::Value) -> Vec<CatalogEntry> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_dns_endpoint_by_type() {
        let entries = catalog(json!([
            {"name": "cloudFiles", "type": "object-store", "endpoints": [{"publicURL": "https://storage.example/v1"}]},
            {"name": "cloudDNS", "type": "rax:dns", "endpoints": [{"publicURL": "https://dns.api.rackspacecloud.com/v1.0/123456"}]}
        ]));
        assert_eq!(
            dns_endpoint(&entries).unwrap(),
            "https://dns.api.rackspacecloud.com/v1.0/123456"
        );
    }

    #[test]
    fn test_dns_endpoint_missing() {
        let entries = catalog(json!([
            {"name": "cloudServers", "type": "compute", "endpoints": []}
        ]));
        assert!(matches!(
            dns_endpoint(&entries),
            Err(RackspaceError::MissingService(_))
        ));
    }

    #[test]
    fn test_session_debug_hides_token() {
        let session = Session {
            token: "tok-secret".to_string(),
            dns_endpoint: "https://dns.example/v1.0/1".to_string(),
            expires: None,
        };
        assert!(!format!("{:?}", session).contains("tok-secret"));
    }
}
