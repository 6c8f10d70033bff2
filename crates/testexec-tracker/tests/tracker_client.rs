//! Integration tests for TrackerSession.
//!
//! Uses wiremock for HTTP mocking. Tests cover connection checks, issue
//! creation, issue read/update, transitions, and status mapping (400/401/403/404/5xx).

use serde_json::json;
use testexec_tracker::{TrackerConfig, TrackerError, TrackerSession, TRACKER_USER_AGENT};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_session(mock_server: &MockServer) -> TrackerSession {
    let config = TrackerConfig::new(mock_server.uri(), "test-token")
        .expect("valid config")
        .with_project("PROJ");
    TrackerSession::open(config).expect("failed to open session")
}

#[tokio::test]
async fn test_server_info_and_myself() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/2/serverInfo"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("user-agent", TRACKER_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "baseUrl": "https://jira.example.com",
            "version": "9.12.2",
            "serverTitle": "Example Jira"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/api/2/myself"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "ci-bot",
            "displayName": "CI Bot"
        })))
        .mount(&mock_server)
        .await;

    let session = create_test_session(&mock_server);
    let info = session.server_info().await.expect("server info");
    assert_eq!(info.version.as_deref(), Some("9.12.2"));
    assert_eq!(info.server_title.as_deref(), Some("Example Jira"));

    let me = session.myself().await.expect("myself");
    assert_eq!(me.label(), "CI Bot");
}

#[tokio::test]
async fn test_myself_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/2/myself"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let session = create_test_session(&mock_server);
    let err = session.myself().await.unwrap_err();
    assert!(matches!(err, TrackerError::Unauthorized { .. }));
    assert!(err.is_connectivity());
}

#[tokio::test]
async fn test_forbidden_maps_to_unauthorized_with_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/2/serverInfo"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "errorMessages": ["You do not have permission"]
        })))
        .mount(&mock_server)
        .await;

    let session = create_test_session(&mock_server);
    match session.server_info().await {
        Err(TrackerError::Unauthorized { message }) => {
            assert!(message.contains("403"));
            assert!(message.contains("You do not have permission"));
        }
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_test_execution() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/api/2/issue"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({
            "fields": {
                "project": {"key": "PROJ"},
                "summary": "Automated Test Execution Creation",
                "customfield_10415": ["PROJ-1", "PROJ-2"],
                "issuetype": {"name": "Test Execution"}
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "10042",
            "key": "PROJ-5500",
            "self": "https://jira.example.com/rest/api/2/issue/10042"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let session = create_test_session(&mock_server);
    let created = session
        .create_test_execution(
            "PROJ",
            "Automated Test Execution Creation",
            &["PROJ-1".to_string(), "PROJ-2".to_string()],
        )
        .await
        .expect("create failed");

    assert_eq!(created.key, "PROJ-5500");
    assert_eq!(created.id, "10042");
}

#[tokio::test]
async fn test_create_rejected_reports_field_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/api/2/issue"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errorMessages": [],
            "errors": {"issuetype": "Specify a valid issue type"}
        })))
        .mount(&mock_server)
        .await;

    let session = create_test_session(&mock_server);
    match session.create_test_execution("PROJ", "s", &[]).await {
        Err(TrackerError::Rejected { message }) => {
            assert_eq!(message, "issuetype: Specify a valid issue type");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_issue() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/2/issue/PROJ-5500"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "10042",
            "key": "PROJ-5500",
            "fields": {
                "summary": "Automated Test Execution Creation",
                "description": "Nightly",
                "status": {"name": "Open", "id": "1"},
                "issuetype": {"name": "Test Execution"}
            }
        })))
        .mount(&mock_server)
        .await;

    let session = create_test_session(&mock_server);
    let issue = session.get_issue("PROJ-5500").await.expect("get failed");
    assert_eq!(issue.key, "PROJ-5500");
    assert_eq!(issue.fields.description.as_deref(), Some("Nightly"));
    assert_eq!(issue.status_name(), Some("Open"));
}

#[tokio::test]
async fn test_get_issue_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/2/issue/PROJ-404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errorMessages": ["Issue Does Not Exist"]
        })))
        .mount(&mock_server)
        .await;

    let session = create_test_session(&mock_server);
    match session.get_issue("PROJ-404").await {
        Err(TrackerError::NotFound { resource }) => assert_eq!(resource, "issue/PROJ-404"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_description() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/rest/api/2/issue/PROJ-5500"))
        .and(body_json(json!({"fields": {"description": "New Description"}})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let session = create_test_session(&mock_server);
    session
        .update_description("PROJ-5500", "New Description")
        .await
        .expect("update failed");
}

#[tokio::test]
async fn test_transition_by_target_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/2/issue/PROJ-5500/transitions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transitions": [
                {"id": "11", "name": "Start Progress", "to": {"name": "In Progress"}},
                {"id": "31", "name": "Close", "to": {"name": "Done"}}
            ]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/api/2/issue/PROJ-5500/transitions"))
        .and(body_json(json!({"transition": {"id": "31"}})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let session = create_test_session(&mock_server);
    let applied = session
        .transition_issue("PROJ-5500", "done")
        .await
        .expect("transition failed");
    assert_eq!(applied.id, "31");
    assert_eq!(applied.name, "Close");
}

#[tokio::test]
async fn test_transition_unknown_lists_available() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/2/issue/PROJ-1/transitions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transitions": [{"id": "11", "name": "Start Progress"}]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/api/2/issue/PROJ-1/transitions"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&mock_server)
        .await;

    let session = create_test_session(&mock_server);
    match session.transition_issue("PROJ-1", "Done").await {
        Err(TrackerError::TransitionNotFound {
            key,
            requested,
            available,
        }) => {
            assert_eq!(key, "PROJ-1");
            assert_eq!(requested, "Done");
            assert_eq!(available, vec!["Start Progress".to_string()]);
        }
        other => panic!("expected TransitionNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_maps_to_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/2/serverInfo"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let session = create_test_session(&mock_server);
    match session.server_info().await {
        Err(TrackerError::Network { message }) => {
            assert_eq!(message, "HTTP 503: maintenance");
        }
        other => panic!("expected Network, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_maps_to_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/2/issue/PROJ-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&mock_server)
        .await;

    let session = create_test_session(&mock_server);
    let err = session.get_issue("PROJ-1").await.unwrap_err();
    assert!(matches!(err, TrackerError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Bind and drop to get a port with nothing listening.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let config = TrackerConfig::new(format!("http://{}", addr), "t")
        .unwrap()
        .with_timeout_secs(5);
    let session = TrackerSession::open(config).unwrap();

    let err = session.server_info().await.unwrap_err();
    assert!(matches!(err, TrackerError::Network { .. }));
    assert!(err.is_connectivity());
}
