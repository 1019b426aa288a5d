// Rackspace Cloud DNS client (DnsApi + JobStatusSource implementation)

use crate::auth::{self, Session};
use crate::config::RackspaceConfig;
use crate::error::RackspaceError;
use crate::wire::{fault_message, DomainsPage, Page, RecordsPage, WireJob};
use async_trait::async_trait;
use clouddns_core::domain::{
    Domain, DomainId, JobHandle, JobStatusReport, RecordDetail, RecordId, RecordType,
};
use clouddns_core::port::{DnsApi, JobStatusSource};
use clouddns_core::{AppError, Result};
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info, warn};

const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Rackspace Cloud DNS client
///
/// Holds one authenticated session for its whole lifetime. Dropping the
/// client releases the session and its connection pool.
pub struct RackspaceDnsClient {
    http: Client,
    session: Session,
    page_size: u32,
}

impl RackspaceDnsClient {
    /// Authenticate and open a session
    pub async fn connect(config: &RackspaceConfig) -> std::result::Result<Self, RackspaceError> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        let session = auth::authenticate(&http, config).await?;

        Ok(Self {
            http,
            session,
            page_size: config.page_size,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Send an authenticated request and turn non-2xx answers into errors
    async fn send(&self, request: RequestBuilder) -> std::result::Result<Response, RackspaceError> {
        let response = request
            .header(AUTH_TOKEN_HEADER, &self.session.token)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = fault_message(&text);
        if status == StatusCode::UNAUTHORIZED {
            return Err(RackspaceError::Unauthorized(message));
        }
        Err(RackspaceError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn read_json<T: DeserializeOwned>(
        response: Response,
    ) -> std::result::Result<T, RackspaceError> {
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> std::result::Result<T, RackspaceError> {
        let response = self.send(self.http.get(url)).await?;
        Self::read_json(response).await
    }

    /// Lazily walk a paginated listing by following `next` links
    ///
    /// A page is only requested once the previous one has been consumed.
    /// An empty page ends the listing even if it advertises a `next` link,
    /// and so does a `next` link that was already fetched.
    fn paginate<'a, P>(&'a self, first_url: String) -> BoxStream<'a, Result<P::Item>>
    where
        P: Page + DeserializeOwned + Send + 'a,
        P::Item: Send + 'a,
    {
        let state = (Some(first_url), HashSet::new());
        stream::try_unfold(state, move |(next, mut fetched)| async move {
            let Some(url) = next else {
                return Ok::<_, AppError>(None);
            };

            let page: P = self.get_json(&url).await?;
            let next = page.next_href();
            let items = page.into_items();
            debug!(url = %url, items = items.len(), has_next = next.is_some(), "Fetched page");
            fetched.insert(url);

            let next = match next {
                Some(href) if fetched.contains(&href) => {
                    warn!(href = %href, "Listing links back to a fetched page, stopping");
                    None
                }
                _ if items.is_empty() => None,
                next => next,
            };
            Ok(Some((
                stream::iter(items.into_iter().map(Ok::<_, AppError>)),
                (next, fetched),
            )))
        })
        .try_flatten()
        .boxed()
    }
}

impl Drop for RackspaceDnsClient {
    fn drop(&mut self) {
        info!(dns_endpoint = %self.session.dns_endpoint, "Cloud DNS session released");
    }
}

#[async_trait]
impl JobStatusSource for RackspaceDnsClient {
    async fn job_status(&self, job: &JobHandle) -> Result<JobStatusReport> {
        let url = format!(
            "{}/status/{}?showDetails=true",
            self.session.dns_endpoint, job.id
        );
        let wire: WireJob = self.get_json(&url).await?;
        Ok(wire.into_report())
    }
}

#[async_trait]
impl DnsApi for RackspaceDnsClient {
    fn list_domains(&self) -> BoxStream<'_, Result<Domain>> {
        let url = format!(
            "{}/domains?limit={}&offset=0",
            self.session.dns_endpoint, self.page_size
        );
        self.paginate::<DomainsPage>(url)
    }

    fn list_records_by_type(
        &self,
        domain_id: DomainId,
        record_type: RecordType,
    ) -> BoxStream<'_, Result<RecordDetail>> {
        let url = format!(
            "{}/domains/{}/records?type={}&limit={}&offset=0",
            self.session.dns_endpoint, domain_id, record_type, self.page_size
        );
        self.paginate::<RecordsPage>(url)
    }

    async fn delete_records(
        &self,
        domain_id: DomainId,
        record_ids: &BTreeSet<RecordId>,
    ) -> Result<JobHandle> {
        let url = format!("{}/domains/{}/records", self.session.dns_endpoint, domain_id);
        let query: Vec<(&str, &str)> = record_ids.iter().map(|id| ("id", id.as_str())).collect();

        info!(domain_id = domain_id, count = record_ids.len(), "Deleting records");
        let response = self.send(self.http.delete(&url).query(&query)).await?;
        let wire: WireJob = Self::read_json(response).await?;

        Ok(wire.into_handle())
    }
}
