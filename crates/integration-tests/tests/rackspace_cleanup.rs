//! End-to-end record cleanup against a stubbed Rackspace API
//!
//! Identity, domain listing, record listing, bulk delete and job status are
//! served by wiremock; the workflow runs exactly as the CLI wires it.

use clouddns_core::application::{PollPolicy, RecordCleanupService};
use clouddns_core::domain::RecordType;
use clouddns_core::AppError;
use clouddns_infra_rackspace::{Credentials, RackspaceConfig, RackspaceDnsClient, Region};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TENANT_PATH: &str = "/v1.0/777";

async fn start_provider() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2.0/tokens"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": {
                "token": {"id": "tok-e2e"},
                "serviceCatalog": [{
                    "name": "cloudDNS",
                    "type": "rax:dns",
                    "endpoints": [{"publicURL": format!("{}{}", server.uri(), TENANT_PATH)}]
                }]
            }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{}/domains", TENANT_PATH)))
        .and(header("X-Auth-Token", "tok-e2e"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "domains": [
                {"id": 10, "name": "other"},
                {"id": 20, "name": "alt-example.com"}
            ],
            "totalEntries": 2
        })))
        .mount(&server)
        .await;

    server
}

async fn mount_records(server: &MockServer, records: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("{}/domains/20/records", TENANT_PATH)))
        .and(query_param("type", "TXT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "records": records })))
        .mount(server)
        .await;
}

async fn mount_job_status(server: &MockServer, status: serde_json::Value, times: Option<u64>) {
    let mock = Mock::given(method("GET"))
        .and(path(format!("{}/status/job-e2e", TENANT_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_json(status));
    match times {
        Some(n) => mock.up_to_n_times(n).mount(server).await,
        None => mock.mount(server).await,
    }
}

fn accepted() -> ResponseTemplate {
    ResponseTemplate::new(202).set_body_json(json!({
        "jobId": "job-e2e",
        "status": "INITIALIZED",
        "verb": "DELETE"
    }))
}

async fn service(server: &MockServer) -> RecordCleanupService {
    let config = RackspaceConfig::new(Credentials::new("demo", "k3y"), Region::Us)
        .with_identity_url(format!("{}/v2.0", server.uri()));
    let client = RackspaceDnsClient::connect(&config).await.unwrap();
    let policy = PollPolicy::new(Duration::from_millis(10), Duration::from_secs(5)).unwrap();

    RecordCleanupService::new(Arc::new(client), policy)
}

#[tokio::test]
async fn deletes_both_txt_records_and_reports_two() {
    let server = start_provider().await;
    mount_records(
        &server,
        json!([
            {"id": "r1", "name": "alt-example.com", "type": "TXT", "data": "first"},
            {"id": "r2", "name": "alt-example.com", "type": "TXT", "data": "second"}
        ]),
    )
    .await;

    Mock::given(method("DELETE"))
        .and(path(format!("{}/domains/20/records", TENANT_PATH)))
        .and(query_param("id", "r1"))
        .and(query_param("id", "r2"))
        .respond_with(accepted())
        .expect(1)
        .mount(&server)
        .await;

    mount_job_status(&server, json!({"jobId": "job-e2e", "status": "RUNNING"}), Some(2)).await;
    mount_job_status(&server, json!({"jobId": "job-e2e", "status": "COMPLETED"}), None).await;

    let report = service(&server)
        .await
        .run("alt-", RecordType::TXT)
        .await
        .unwrap();

    assert_eq!(report.domain.id, 20);
    assert_eq!(report.deleted(), 2);
    assert_eq!(report.job.polls, 3);
}

#[tokio::test]
async fn empty_record_set_still_submits_delete() {
    let server = start_provider().await;
    mount_records(&server, json!([])).await;

    Mock::given(method("DELETE"))
        .and(path(format!("{}/domains/20/records", TENANT_PATH)))
        .and(query_param_is_missing("id"))
        .respond_with(accepted())
        .expect(1)
        .mount(&server)
        .await;
    mount_job_status(&server, json!({"jobId": "job-e2e", "status": "COMPLETED"}), None).await;

    let report = service(&server)
        .await
        .run("alt-", RecordType::TXT)
        .await
        .unwrap();

    assert_eq!(report.deleted(), 0);
    assert!(report.records.is_empty());
}

#[tokio::test]
async fn missing_domain_is_reported_and_nothing_is_deleted() {
    let server = start_provider().await;

    Mock::given(method("DELETE"))
        .respond_with(accepted())
        .expect(0)
        .mount(&server)
        .await;

    let err = service(&server)
        .await
        .run("nope-", RecordType::TXT)
        .await
        .unwrap_err();

    assert!(err.is_expected());
    assert!(matches!(err, AppError::DomainNotFound { ref prefix } if prefix == "nope-"));
}

#[tokio::test]
async fn provider_job_error_surfaces_as_job_failed() {
    let server = start_provider().await;
    mount_records(
        &server,
        json!([{"id": "r1", "name": "alt-example.com", "type": "TXT", "data": "first"}]),
    )
    .await;

    Mock::given(method("DELETE"))
        .and(path(format!("{}/domains/20/records", TENANT_PATH)))
        .respond_with(accepted())
        .mount(&server)
        .await;
    mount_job_status(
        &server,
        json!({
            "jobId": "job-e2e",
            "status": "ERROR",
            "error": {"code": 400, "message": "BadRequest", "details": "Record r1 is locked"}
        }),
        None,
    )
    .await;

    let err = service(&server)
        .await
        .run("alt-", RecordType::TXT)
        .await
        .unwrap_err();

    match err {
        AppError::JobFailed { job_id, detail } => {
            assert_eq!(job_id, "job-e2e");
            assert_eq!(detail.code, Some(400));
            assert_eq!(detail.details.as_deref(), Some("Record r1 is locked"));
        }
        other => panic!("expected JobFailed, got {:?}", other),
    }
}
