// Bulk Record Deletion Use Case

use crate::application::JobAwaiter;
use crate::domain::{Domain, JobCompletion, RecordDetail, RecordId, RecordType};
use crate::error::Result;
use crate::port::DnsApi;
use futures::TryStreamExt;
use std::collections::BTreeSet;
use tracing::info;

/// Result of a bulk delete that completed on the provider
#[derive(Debug, Clone)]
pub struct DeletionReport {
    pub domain: Domain,
    pub record_type: RecordType,
    /// Records as listed before the delete was submitted
    pub records: Vec<RecordDetail>,
    /// Identifiers sent in the delete request
    pub record_ids: BTreeSet<RecordId>,
    pub job: JobCompletion,
}

impl DeletionReport {
    /// Number of records deleted
    pub fn deleted(&self) -> usize {
        self.record_ids.len()
    }
}

/// List every record of `record_type` on `domain`
pub async fn list_records(
    api: &dyn DnsApi,
    domain: &Domain,
    record_type: RecordType,
) -> Result<Vec<RecordDetail>> {
    let records: Vec<RecordDetail> = api
        .list_records_by_type(domain.id, record_type)
        .try_collect()
        .await?;

    info!(
        domain = %domain.name,
        record_type = %record_type,
        count = records.len(),
        "Listed records"
    );

    Ok(records)
}

/// Delete every record of `record_type` on `domain` with a single request
///
/// The request is submitted even when no records exist; the report then
/// carries a zero count.
pub async fn execute(
    api: &dyn DnsApi,
    awaiter: &JobAwaiter,
    domain: &Domain,
    record_type: RecordType,
) -> Result<DeletionReport> {
    let records = list_records(api, domain, record_type).await?;

    // Captured before submission and never touched again while polling
    let record_ids: BTreeSet<RecordId> = records.iter().map(|r| r.id.clone()).collect();

    info!(
        domain = %domain.name,
        record_type = %record_type,
        count = record_ids.len(),
        "Submitting bulk delete"
    );
    let job = api.delete_records(domain.id, &record_ids).await?;
    info!(job_id = %job.id, status = %job.status, "Delete job submitted");

    let completion = awaiter.await_complete(api, &job).await?;

    Ok(DeletionReport {
        domain: domain.clone(),
        record_type,
        records,
        record_ids,
        job: completion,
    })
}
