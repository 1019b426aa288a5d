// Domain Lookup Use Case

use crate::domain::Domain;
use crate::error::{AppError, Result};
use crate::port::DnsApi;
use futures::TryStreamExt;
use tracing::{debug, info};

/// Find the first domain whose name starts with `prefix`
///
/// Domains are scanned in provider order and the listing stops being polled
/// as soon as a match is found, so later pages are never requested.
pub async fn execute(api: &dyn DnsApi, prefix: &str) -> Result<Domain> {
    if prefix.is_empty() {
        return Err(AppError::Validation(
            "domain prefix must not be empty".to_string(),
        ));
    }

    let mut domains = api.list_domains();
    let mut scanned = 0usize;

    while let Some(domain) = domains.try_next().await? {
        scanned += 1;
        if domain.has_prefix(prefix) {
            info!(
                domain_id = domain.id,
                domain = %domain.name,
                scanned = scanned,
                "Found domain"
            );
            return Ok(domain);
        }
        debug!(domain = %domain.name, "Skipping domain");
    }

    Err(AppError::DomainNotFound {
        prefix: prefix.to_string(),
    })
}
