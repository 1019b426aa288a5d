// DNS API Port (Interface)

use super::JobStatusSource;
use crate::domain::{Domain, DomainId, JobHandle, RecordDetail, RecordId, RecordType};
use crate::error::Result;
use async_trait::async_trait;
use futures::stream::BoxStream;
use std::collections::BTreeSet;

/// Remote DNS API surface needed by the record cleanup workflow
///
/// Listings are lazy: pages are fetched as the stream is polled, and every
/// call starts a fresh listing from the first page.
#[async_trait]
pub trait DnsApi: JobStatusSource {
    /// All domains on the account, in provider order
    fn list_domains(&self) -> BoxStream<'_, Result<Domain>>;

    /// Records of a single type on a domain
    fn list_records_by_type(
        &self,
        domain_id: DomainId,
        record_type: RecordType,
    ) -> BoxStream<'_, Result<RecordDetail>>;

    /// Submit one bulk delete; the provider executes it asynchronously
    async fn delete_records(
        &self,
        domain_id: DomainId,
        record_ids: &BTreeSet<RecordId>,
    ) -> Result<JobHandle>;
}
