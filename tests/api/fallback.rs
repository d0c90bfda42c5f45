use invoflow_cli::services::api_client::ApiClient;
use invoflow_cli::services::request_service::RequestService;
use invoflow_cli::structs::request_filters::RequestFilters;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{paginated, request_json, spawn_server};

// Nothing listens here; connecting fails without producing a response.
const DEAD_URL: &str = "http://127.0.0.1:1";

#[tokio::test]
async fn connection_failure_falls_back_to_next_base_url() {
    let server = spawn_server().await;
    Mock::given(method("GET"))
        .and(path("/requests/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated(vec![], 1, 20, 0)))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::with_base_urls(vec![DEAD_URL.to_string(), server.uri()], None).unwrap();
    let service = RequestService::new(&client);

    let result = service.list(1, 20, &RequestFilters::default()).await;
    assert!(result.is_ok());
    assert_eq!(client.active_base_url(), server.uri());
}

#[tokio::test]
async fn fallback_switch_is_permanent_for_the_session() {
    let server = spawn_server().await;
    Mock::given(method("GET"))
        .and(path("/requests/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated(vec![], 1, 20, 0)))
        .expect(2)
        .mount(&server)
        .await;

    let client = ApiClient::with_base_urls(vec![DEAD_URL.to_string(), server.uri()], None).unwrap();
    let service = RequestService::new(&client);

    assert!(service.list(1, 20, &RequestFilters::default()).await.is_ok());
    assert_eq!(client.active_base_url(), server.uri());

    // Second call starts from the pinned base URL; the dead candidate is
    // never retried.
    assert!(service.list(2, 20, &RequestFilters::default()).await.is_ok());
    assert_eq!(client.active_base_url(), server.uri());
}

#[tokio::test]
async fn http_error_statuses_never_trigger_fallback() {
    let failing = spawn_server().await;
    let standby = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/requests/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("request not found"))
        .expect(1)
        .mount(&failing)
        .await;
    // The standby must never be contacted; a 404 is a real answer.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(request_json(404, "Pending")))
        .expect(0)
        .mount(&standby)
        .await;

    let client = ApiClient::with_base_urls(vec![failing.uri(), standby.uri()], None).unwrap();
    let service = RequestService::new(&client);

    let result = service.get(404).await;
    let error = result.unwrap_err();
    assert_eq!(error.status_code(), Some(404));
    assert_eq!(client.active_base_url(), failing.uri());
}

#[tokio::test]
async fn exhausting_every_candidate_surfaces_a_network_error() {
    let client =
        ApiClient::with_base_urls(vec![DEAD_URL.to_string(), "http://127.0.0.1:2".to_string()], None)
            .unwrap();
    let service = RequestService::new(&client);

    let error = service.get(1).await.unwrap_err();
    assert!(error.is_recoverable());
    assert_eq!(error.status_code(), None);
}

#[tokio::test]
async fn bearer_token_is_attached_to_every_request() {
    let server = spawn_server().await;
    Mock::given(method("GET"))
        .and(path("/requests/7"))
        .and(header("authorization", "Bearer sekrit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(request_json(7, "Pending")))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::with_base_urls(vec![server.uri()], Some("sekrit".to_string())).unwrap();
    let service = RequestService::new(&client);

    assert!(service.get(7).await.is_ok());
}

#[tokio::test]
async fn blank_auth_token_is_treated_as_absent() {
    let server = spawn_server().await;
    Mock::given(method("GET"))
        .and(path("/requests/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(request_json(7, "Pending")))
        .mount(&server)
        .await;

    let client = ApiClient::with_base_urls(vec![server.uri()], Some("   ".to_string())).unwrap();
    let service = RequestService::new(&client);

    let received = service.get(7).await;
    assert!(received.is_ok());

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[test]
fn empty_candidate_list_is_a_configuration_error() {
    assert!(ApiClient::with_base_urls(Vec::new(), None).is_err());
}
