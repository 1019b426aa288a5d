// Domain (DNS zone) Model

use serde::{Deserialize, Serialize};

/// Provider-assigned domain identifier
pub type DomainId = u64;

/// A domain hosted by the provider (read-only here)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: DomainId,
    pub name: String,
    pub email_address: Option<String>,
    pub ttl: Option<u32>,
    pub comment: Option<String>,
}

impl Domain {
    pub fn new(id: DomainId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email_address: None,
            ttl: None,
            comment: None,
        }
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.name.starts_with(prefix)
    }
}
