// Rackspace Cloud DNS v1.0 / Identity v2.0 wire format

use clouddns_core::domain::{
    Domain, JobErrorDetail, JobHandle, JobStatus, JobStatusReport, RecordDetail, RecordType,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

// ---- Identity ----

#[derive(Debug, Serialize)]
pub(crate) struct AuthRequest<'a> {
    pub auth: AuthBody<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AuthBody<'a> {
    #[serde(rename = "RAX-KSKEY:apiKeyCredentials")]
    pub api_key_credentials: ApiKeyCredentials<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ApiKeyCredentials<'a> {
    pub username: &'a str,
    #[serde(rename = "apiKey")]
    pub api_key: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuthResponse {
    pub access: Access,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Access {
    pub token: Token,
    #[serde(rename = "serviceCatalog", default)]
    pub service_catalog: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Token {
    pub id: String,
    pub expires: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CatalogEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: String,
    #[serde(default)]
    pub endpoints: Vec<CatalogEndpoint>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CatalogEndpoint {
    #[serde(rename = "publicURL")]
    pub public_url: String,
}

// ---- Errors ----

/// Cloud DNS fault body: `{"code": 404, "message": "...", "details": "..."}`
#[derive(Debug, Deserialize)]
pub(crate) struct Fault {
    pub message: String,
    pub details: Option<String>,
}

/// Identity fault body: `{"unauthorized": {"code": 401, "message": "..."}}`
#[derive(Debug, Deserialize)]
pub(crate) struct IdentityFault {
    #[serde(alias = "badRequest", alias = "itemNotFound", alias = "forbidden")]
    pub unauthorized: Fault,
}

/// Best-effort human-readable message from an error body
pub(crate) fn fault_message(body: &str) -> String {
    if let Ok(fault) = serde_json::from_str::<Fault>(body) {
        return match fault.details {
            Some(details) if !details.is_empty() => format!("{}: {}", fault.message, details),
            _ => fault.message,
        };
    }
    if let Ok(fault) = serde_json::from_str::<IdentityFault>(body) {
        return fault.unauthorized.message;
    }
    body.trim().to_string()
}

// ---- Listings ----

#[derive(Debug, Deserialize)]
pub(crate) struct Link {
    pub href: String,
    pub rel: String,
}

/// A page of a paginated listing
pub(crate) trait Page {
    type Item;

    fn links(&self) -> &[Link];

    fn into_items(self) -> Vec<Self::Item>;

    fn next_href(&self) -> Option<String> {
        self.links()
            .iter()
            .find(|link| link.rel == "next")
            .map(|link| link.href.clone())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DomainsPage {
    #[serde(default)]
    pub domains: Vec<WireDomain>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Page for DomainsPage {
    type Item = Domain;

    fn links(&self) -> &[Link] {
        &self.links
    }

    fn into_items(self) -> Vec<Domain> {
        self.domains.into_iter().map(Domain::from).collect()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireDomain {
    pub id: u64,
    pub name: String,
    #[serde(rename = "emailAddress")]
    pub email_address: Option<String>,
    pub ttl: Option<u32>,
    pub comment: Option<String>,
}

impl From<WireDomain> for Domain {
    fn from(w: WireDomain) -> Self {
        Domain {
            id: w.id,
            name: w.name,
            email_address: w.email_address,
            ttl: w.ttl,
            comment: w.comment,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecordsPage {
    #[serde(default)]
    pub records: Vec<WireRecord>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Page for RecordsPage {
    type Item = RecordDetail;

    fn links(&self) -> &[Link] {
        &self.links
    }

    fn into_items(self) -> Vec<RecordDetail> {
        self.records
            .into_iter()
            .filter_map(|w| {
                let id = w.id.clone();
                let record = w.into_record();
                if record.is_none() {
                    warn!(record_id = %id, "Skipping record with unsupported type");
                }
                record
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub data: String,
    pub ttl: Option<u32>,
    pub priority: Option<u16>,
    pub comment: Option<String>,
}

impl WireRecord {
    fn into_record(self) -> Option<RecordDetail> {
        let record_type: RecordType = self.record_type.parse().ok()?;
        Some(RecordDetail {
            id: self.id,
            name: self.name,
            record_type,
            data: self.data,
            ttl: self.ttl,
            priority: self.priority,
            comment: self.comment,
        })
    }
}

// ---- Asynchronous jobs ----

/// Body of `202 Accepted` and of `GET /status/{jobId}`
#[derive(Debug, Deserialize)]
pub(crate) struct WireJob {
    #[serde(rename = "jobId")]
    pub job_id: String,
    pub status: String,
    #[serde(rename = "callbackUrl")]
    pub callback_url: Option<String>,
    pub error: Option<WireJobError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireJobError {
    pub code: Option<u16>,
    pub message: Option<String>,
    pub details: Option<String>,
}

impl WireJob {
    pub fn into_handle(self) -> JobHandle {
        JobHandle {
            id: self.job_id,
            status: JobStatus::from_provider(&self.status),
            callback_url: self.callback_url,
        }
    }

    pub fn into_report(self) -> JobStatusReport {
        JobStatusReport {
            status: JobStatus::from_provider(&self.status),
            error: self.error.map(|e| JobErrorDetail {
                code: e.code,
                message: e.message.unwrap_or_else(|| "unknown error".to_string()),
                details: e.details,
            }),
            job_id: self.job_id,
        }
    }
}
