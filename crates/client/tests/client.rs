//! Integration tests for the FHIR resource client.
//!
//! These tests start a real in-process axum server on an ephemeral port
//! and exercise the client through the full HTTP stack, recording each
//! request so the URL path, method, and headers can be asserted.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::Request,
    http::{StatusCode, header},
};

use fhir_client::{ClientError, Config, FhirClient};
use fhir_model::{
    FhirVersion, JsonCodec, ModelError, Patient, Resource, ResourceCodec, ResourceRef,
    ResourceType,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// One request as the mock server saw it
#[derive(Debug, Clone)]
struct Recorded {
    method: String,
    path: String,
    content_type: Option<String>,
    body: Vec<u8>,
}

type RequestLog = Arc<Mutex<Vec<Recorded>>>;

/// Build a mock FHIR server that records every request and answers with
/// a canned response.
fn mock_app(log: RequestLog, status: StatusCode, body: &'static str) -> Router {
    Router::new().fallback(move |req: Request| {
        let log = log.clone();
        async move {
            let (parts, req_body) = req.into_parts();
            let bytes = axum::body::to_bytes(req_body, usize::MAX)
                .await
                .expect("Failed to read request body");

            log.lock().unwrap().push(Recorded {
                method: parts.method.to_string(),
                path: parts.uri.path().to_string(),
                content_type: parts
                    .headers
                    .get(header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string),
                body: bytes.to_vec(),
            });

            (
                status,
                [(header::CONTENT_TYPE, "application/fhir+json")],
                body,
            )
        }
    })
}

/// Serve the app on an ephemeral local port and return its address.
async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to get local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    addr
}

/// Client configuration pointed at the mock server.
fn test_config(addr: SocketAddr) -> Config {
    Config {
        base_url: format!("http://{}", addr),
        time_zone: "UTC".to_string(),
        request_timeout_secs: 5,
        patient_id: "example".to_string(),
        encounter_id: "example".to_string(),
    }
}

fn codec() -> JsonCodec {
    JsonCodec::new(FhirVersion::R4, "UTC")
}

const PATIENT_BODY: &str = r#"{
    "resourceType": "Patient",
    "id": "DDONYVATHBD6R3KW",
    "name": [{"family": "Esterkin", "given": ["Aki"]}],
    "gender": "female"
}"#;

const OUTCOME_BODY: &str = r#"{
    "resourceType": "OperationOutcome",
    "issue": [{"severity": "error", "code": "invalid", "diagnostics": "Appointment is malformed"}]
}"#;

// ---------------------------------------------------------------------------
// Fetch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_builds_the_specified_request() {
    let log: RequestLog = Arc::default();
    let addr = serve(mock_app(log.clone(), StatusCode::OK, PATIENT_BODY)).await;
    let client = FhirClient::new(&test_config(addr)).unwrap();

    let target = ResourceRef::new(ResourceType::Patient, "DDONYVATHBD6R3KW").unwrap();
    let body = client.fetch(&target).await.unwrap();

    let recorded = log.lock().unwrap().first().cloned().unwrap();
    assert_eq!(recorded.method, "GET");
    assert_eq!(recorded.path, "/fhir/Patient/DDONYVATHBD6R3KW");
    assert_eq!(
        recorded.content_type.as_deref(),
        Some("application/fhir+json; charset=UTF-8")
    );

    // The raw body decodes into the typed resource
    match codec().decode(&body).unwrap() {
        Resource::Patient(patient) => assert_eq!(patient.given_names(), ["Aki"]),
        other => panic!("Expected a Patient, got {:?}", other),
    }
}

#[tokio::test]
async fn fetch_transport_errors_are_typed_and_retryable() {
    // Bind then drop a listener so the port refuses connections
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = FhirClient::new(&test_config(addr)).unwrap();
    let target = ResourceRef::new(ResourceType::Patient, "anyone").unwrap();

    let err = client.fetch(&target).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)), "got {:?}", err);
    assert!(err.is_retryable());
}

#[tokio::test]
async fn bad_base_url_is_a_request_error_not_a_transport_error() {
    let config = Config {
        base_url: "not a url".to_string(),
        time_zone: "UTC".to_string(),
        request_timeout_secs: 5,
        patient_id: "example".to_string(),
        encounter_id: "example".to_string(),
    };
    let client = FhirClient::new(&config).unwrap();
    let target = ResourceRef::new(ResourceType::Patient, "anyone").unwrap();

    let err = client.fetch(&target).await.unwrap_err();
    assert!(matches!(err, ClientError::Request(_)), "got {:?}", err);
    assert!(!err.is_retryable());

    // The write path classifies the same way
    let err = client.write(&target, b"{}".to_vec()).await.unwrap_err();
    assert!(matches!(err, ClientError::Request(_)), "got {:?}", err);
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn fetch_server_errors_are_not_retryable() {
    let log: RequestLog = Arc::default();
    let addr = serve(mock_app(
        log,
        StatusCode::INTERNAL_SERVER_ERROR,
        "database on fire",
    ))
    .await;
    let client = FhirClient::new(&test_config(addr)).unwrap();

    let target = ResourceRef::new(ResourceType::Encounter, "DDONYVATHBD6R32Y").unwrap();
    let err = client.fetch(&target).await.unwrap_err();

    assert!(matches!(err, ClientError::Server { .. }), "got {:?}", err);
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn read_decode_failures_surface_as_model_errors() {
    let log: RequestLog = Arc::default();
    let addr = serve(mock_app(log, StatusCode::OK, "this is not FHIR JSON")).await;
    let client = FhirClient::new(&test_config(addr)).unwrap();

    let target = ResourceRef::new(ResourceType::Patient, "broken").unwrap();
    let err = client.read(&codec(), &target).await.unwrap_err();

    assert!(
        matches!(err, ClientError::Model(ModelError::Decode { .. })),
        "got {:?}",
        err
    );
    assert!(!err.is_retryable());
}

// ---------------------------------------------------------------------------
// Write
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_round_trips_the_appointment() {
    let log: RequestLog = Arc::default();
    let addr = serve(mock_app(log.clone(), StatusCode::OK, "")).await;
    let client = FhirClient::new(&test_config(addr)).unwrap();

    let patient = ResourceRef::new(ResourceType::Patient, "DDONYVATHBD6R3KW").unwrap();
    let resource = Resource::Appointment(fhir_client::demo::sample_appointment(
        "e1316ca3b7ca4c6b9314e7baaf64097b",
        &patient,
    ));

    let status = client.update(&codec(), &resource).await.unwrap();
    assert_eq!(status.as_u16(), 200);

    let recorded = log.lock().unwrap().first().cloned().unwrap();
    assert_eq!(recorded.method, "PUT");
    assert_eq!(
        recorded.path,
        "/fhir/Appointment/e1316ca3b7ca4c6b9314e7baaf64097b"
    );
    assert_eq!(recorded.content_type.as_deref(), Some("application/json"));

    // What went over the wire decodes back to the same field values
    let decoded = codec().decode(&recorded.body).unwrap();
    assert_eq!(decoded, resource);
}

#[tokio::test]
async fn write_non_success_is_an_error_with_diagnostics() {
    let log: RequestLog = Arc::default();
    let addr = serve(mock_app(
        log,
        StatusCode::UNPROCESSABLE_ENTITY,
        OUTCOME_BODY,
    ))
    .await;
    let client = FhirClient::new(&test_config(addr)).unwrap();

    let target = ResourceRef::new(ResourceType::Appointment, "bad").unwrap();
    let err = client.write(&target, b"{}".to_vec()).await.unwrap_err();

    match err {
        ClientError::Client {
            status,
            diagnostics,
        } => {
            assert_eq!(status.as_u16(), 422);
            assert_eq!(diagnostics.as_deref(), Some("Appointment is malformed"));
        }
        other => panic!("Expected a client error, got {:?}", other),
    }
}

#[tokio::test]
async fn update_requires_a_resource_id() {
    let log: RequestLog = Arc::default();
    let addr = serve(mock_app(log.clone(), StatusCode::OK, "")).await;
    let client = FhirClient::new(&test_config(addr)).unwrap();

    let anonymous = Resource::Patient(Patient::default());
    let err = client.update(&codec(), &anonymous).await.unwrap_err();

    assert!(
        matches!(err, ClientError::Model(ModelError::MissingId)),
        "got {:?}",
        err
    );
    // Nothing was sent
    assert!(log.lock().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Codec seam
// ---------------------------------------------------------------------------

/// Codec stub that ignores the wire entirely
struct StubCodec;

impl ResourceCodec for StubCodec {
    fn decode(&self, _bytes: &[u8]) -> Result<Resource, ModelError> {
        Ok(Resource::Patient(Patient {
            id: Some("stubbed".to_string()),
            ..Patient::default()
        }))
    }

    fn encode(&self, _resource: &Resource) -> Result<Vec<u8>, ModelError> {
        Ok(b"{}".to_vec())
    }
}

#[tokio::test]
async fn client_works_against_a_stub_codec() {
    let log: RequestLog = Arc::default();
    let addr = serve(mock_app(log, StatusCode::OK, "anything at all")).await;
    let client = FhirClient::new(&test_config(addr)).unwrap();

    let target = ResourceRef::new(ResourceType::Patient, "whoever").unwrap();
    let resource = client.read(&StubCodec, &target).await.unwrap();

    assert_eq!(resource.id(), Some("stubbed"));
}
