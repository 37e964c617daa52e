use std::net::TcpListener;

use chrono::{Duration, TimeZone, Utc};
use pushkind_leads::domain::lead::{LeadPayload, LeadSource};
use pushkind_leads::domain::types::LeadId;
use pushkind_leads::forms::lead::LeadDraft;
use pushkind_leads::forms::validation::validate;
use pushkind_leads::gateway::errors::GatewayError;
use pushkind_leads::gateway::{LeadReader, LeadWriter};
use serde_json::{Value, json};

mod common;

const STORED_LEAD: &str = r#"{
    "id": 1,
    "companyName": "Acme",
    "contactPerson": "Jo",
    "email": "jo@acme.com",
    "phone": "01700000000",
    "leadSource": "Other",
    "otherSource": "Trade fair",
    "followUpDate": "2026-10-17T12:00:00Z",
    "jobs": [{"title": "Engineer", "type": "Full-time", "salaryRange": "50-60k"}],
    "createdAt": "2026-10-16T12:00:00Z",
    "updatedAt": "2026-10-16T12:00:00Z"
}"#;

fn valid_payload() -> LeadPayload {
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
    let mut draft = LeadDraft::new(now);
    draft.set_field("companyName", "Acme").unwrap();
    draft.set_field("contactPerson", "Jo").unwrap();
    draft.set_field("email", "jo@acme.com").unwrap();
    draft.set_field("phone", "01700000000").unwrap();
    draft.set_field("leadSource", "Other").unwrap();
    draft.set_field("otherSource", "Trade fair").unwrap();
    draft
        .set_field("followUpDate", (now + Duration::days(1)).to_rfc3339())
        .unwrap();
    draft.set_field("jobs.0.title", "Engineer").unwrap();
    draft.set_field("jobs.0.salaryRange", "50-60k").unwrap();

    let lead = validate(&draft, now).expect("draft should be valid");
    LeadPayload::for_create(lead, now)
}

#[test]
fn list_leads_fetches_collection() {
    let server = common::StubServer::start(vec![(200, &format!("[{STORED_LEAD}]"))]);

    let leads = server.gateway().list_leads().expect("should list leads");

    let request = server.next_request();
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/leads");
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].id.get(), 1);
    assert_eq!(leads[0].lead_source, LeadSource::Other);
    assert_eq!(
        leads[0].other_source.as_ref().map(|s| s.as_str()),
        Some("Trade fair")
    );
}

#[test]
fn create_lead_posts_stamped_payload() {
    let server = common::StubServer::start(vec![(201, STORED_LEAD)]);
    let payload = valid_payload();

    let lead = server
        .gateway()
        .create_lead(&payload)
        .expect("should create lead");

    let request = server.next_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/leads");
    let body: Value = serde_json::from_str(&request.body).expect("json body");
    assert_eq!(body["companyName"], json!("Acme"));
    assert_eq!(body["otherSource"], json!("Trade fair"));
    assert_eq!(body["jobs"][0]["type"], json!("Full-time"));
    assert!(body["createdAt"].is_string());
    assert_eq!(body["createdAt"], body["updatedAt"]);
    assert!(body.get("id").is_none());
    assert_eq!(lead.id.get(), 1);
}

#[test]
fn update_lead_puts_to_lead_url() {
    let server = common::StubServer::start(vec![(200, STORED_LEAD)]);
    let payload = valid_payload();

    server
        .gateway()
        .update_lead(LeadId::new(1).unwrap(), &payload)
        .expect("should update lead");

    let request = server.next_request();
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/leads/1");
}

#[test]
fn delete_lead_targets_lead_url() {
    let server = common::StubServer::start(vec![(200, "")]);

    server
        .gateway()
        .delete_lead(LeadId::new(42).unwrap())
        .expect("should delete lead");

    let request = server.next_request();
    assert_eq!(request.method, "DELETE");
    assert_eq!(request.path, "/leads/42");
}

#[test]
fn non_success_status_is_a_server_error() {
    let server = common::StubServer::start(vec![(404, r#"{"error": "missing"}"#)]);

    let result = server.gateway().delete_lead(LeadId::new(7).unwrap());

    match result {
        Err(GatewayError::Server { status, body }) => {
            assert_eq!(status, 404);
            assert!(body.contains("missing"));
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[test]
fn malformed_body_is_a_decode_error() {
    let server = common::StubServer::start(vec![(200, r#"{"not": "a list"}"#)]);

    let result = server.gateway().list_leads();

    assert!(matches!(result, Err(GatewayError::Decode(_))));
}

#[test]
fn unreachable_server_is_a_network_error() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let result = common::gateway_for(&format!("http://{addr}")).list_leads();

    assert!(matches!(result, Err(GatewayError::Network(_))));
}

#[test]
fn trailing_slash_in_base_url_is_ignored() {
    let server = common::StubServer::start(vec![(200, "[]")]);

    let leads = common::gateway_for(&format!("{}/", server.base_url))
        .list_leads()
        .expect("should list leads");

    assert!(leads.is_empty());
    assert_eq!(server.next_request().path, "/leads");
}
