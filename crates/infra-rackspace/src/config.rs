// Rackspace Connection Settings

use std::str::FromStr;
use std::time::Duration;

/// US identity endpoint
pub const US_IDENTITY_URL: &str = "https://identity.api.rackspacecloud.com/v2.0";

/// UK identity endpoint
pub const UK_IDENTITY_URL: &str = "https://lon.identity.api.rackspacecloud.com/v2.0";

/// Items requested per listing page (provider maximum is 100)
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Per-request HTTP timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Rackspace region (selects the identity endpoint)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    Us,
    Uk,
}

impl Region {
    pub fn identity_url(&self) -> &'static str {
        match self {
            Region::Us => US_IDENTITY_URL,
            Region::Uk => UK_IDENTITY_URL,
        }
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "us" => Ok(Region::Us),
            "uk" | "lon" => Ok(Region::Uk),
            other => Err(format!("unknown region '{}' (expected 'us' or 'uk')", other)),
        }
    }
}

/// Account username + API key
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub api_key: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
        }
    }
}

// Never print the key
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_key", &"******")
            .finish()
    }
}

/// Everything needed to open a Cloud DNS session
#[derive(Debug, Clone)]
pub struct RackspaceConfig {
    pub credentials: Credentials,
    pub identity_url: String,
    /// Use this DNS endpoint instead of the one in the service catalog
    pub dns_url: Option<String>,
    pub page_size: u32,
    pub request_timeout: Duration,
}

impl RackspaceConfig {
    pub fn new(credentials: Credentials, region: Region) -> Self {
        Self {
            credentials,
            identity_url: region.identity_url().to_string(),
            dns_url: None,
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_identity_url(mut self, url: impl Into<String>) -> Self {
        self.identity_url = url.into();
        self
    }

    pub fn with_dns_url(mut self, url: impl Into<String>) -> Self {
        self.dns_url = Some(url.into());
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, DEFAULT_PAGE_SIZE);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_parse() {
        assert_eq!("US".parse::<Region>().unwrap(), Region::Us);
        assert_eq!("lon".parse::<Region>().unwrap(), Region::Uk);
        assert!("syd".parse::<Region>().is_err());
    }

    #[test]
    fn test_config_defaults_follow_region() {
        let config = RackspaceConfig::new(Credentials::new("user", "key"), Region::Uk);
        assert_eq!(config.identity_url, UK_IDENTITY_URL);
        assert_eq!(config.page_size, 100);
        assert!(config.dns_url.is_none());
    }

    #[test]
    fn test_page_size_is_clamped() {
        let config = RackspaceConfig::new(Credentials::new("user", "key"), Region::Us);
        assert_eq!(config.clone().with_page_size(0).page_size, 1);
        assert_eq!(config.with_page_size(500).page_size, 100);
    }

    #[test]
    fn test_credentials_debug_hides_key() {
        let creds = Credentials::new("user", "super-secret");
        let printed = format!("{:?}", creds);
        assert!(printed.contains("user"));
        assert!(!printed.contains("super-secret"));
    }
}
