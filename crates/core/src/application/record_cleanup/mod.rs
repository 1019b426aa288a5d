// Record Cleanup Service - find a domain, bulk-delete one record type

pub mod delete;
pub mod lookup;


pub use delete::DeletionReport;

use crate::application::{JobAwaiter, PollPolicy};
use crate::domain::{Domain, RecordDetail, RecordType};
use crate::error::Result;
use crate::port::DnsApi;
use std::sync::Arc;

/// Record Cleanup Service
pub struct RecordCleanupService {
    api: Arc<dyn DnsApi>,
    awaiter: JobAwaiter,
}

impl RecordCleanupService {
    pub fn new(api: Arc<dyn DnsApi>, policy: PollPolicy) -> Self {
        Self {
            api,
            awaiter: JobAwaiter::new(policy),
        }
    }

    /// First domain whose name starts with `prefix`
    pub async fn find_domain(&self, prefix: &str) -> Result<Domain> {
        lookup::execute(self.api.as_ref(), prefix).await
    }

    /// Records that a delete of `record_type` would remove
    pub async fn list_records(
        &self,
        domain: &Domain,
        record_type: RecordType,
    ) -> Result<Vec<RecordDetail>> {
        delete::list_records(self.api.as_ref(), domain, record_type).await
    }

    /// Bulk-delete all `record_type` records and wait for the provider job
    pub async fn delete_records(
        &self,
        domain: &Domain,
        record_type: RecordType,
    ) -> Result<DeletionReport> {
        delete::execute(self.api.as_ref(), &self.awaiter, domain, record_type).await
    }

    /// Find the domain, then delete its records
    pub async fn run(&self, prefix: &str, record_type: RecordType) -> Result<DeletionReport> {
        let domain = self.find_domain(prefix).await?;
        self.delete_records(&domain, record_type).await
    }
}
