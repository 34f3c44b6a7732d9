use std::time::Duration;

use courier_tui::network::client::{create_client, execute_request, send_request};
use courier_tui::{HttpMethod, NetworkResponse, Request};
use wiremock::{
    matchers::{body_string, method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn client() -> reqwest::Client {
    create_client(Duration::from_secs(30)).unwrap()
}

fn request(method: HttpMethod, url: String) -> Request {
    Request {
        method,
        url,
        ..Request::default()
    }
}

/// Content-Type values the server saw on its only request
async fn received_content_types(server: &MockServer) -> Vec<String> {
    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    received[0]
        .headers
        .get_all("content-type")
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Request construction
// ============================================================================

#[tokio::test]
async fn test_body_defaults_to_json_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/items"))
        .and(body_string("{\"a\":1}"))
        .respond_with(ResponseTemplate::new(201).set_body_string("created"))
        .expect(1)
        .mount(&server)
        .await;

    let mut req = request(HttpMethod::POST, format!("{}/items", server.uri()));
    req.body = "{\"a\":1}".to_string();

    let response = send_request(&client(), &req).await;

    assert!(response.error.is_none());
    assert_eq!(response.status_code, 201);
    assert_eq!(response.body, "created");
    assert_eq!(received_content_types(&server).await, vec!["application/json"]);
}

#[tokio::test]
async fn test_explicit_content_type_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let mut req = request(HttpMethod::PUT, format!("{}/doc", server.uri()));
    req.headers.insert("content-type".to_string(), "text/plain".to_string());
    req.body = "hello".to_string();

    let response = send_request(&client(), &req).await;

    assert_eq!(response.status_code, 204);
    assert_eq!(received_content_types(&server).await, vec!["text/plain"]);
}

#[tokio::test]
async fn test_blank_content_type_gets_default() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut req = request(HttpMethod::POST, server.uri());
    req.headers = courier_tui::parse_headers("Content-Type:\nAccept: */*");
    req.body = "{}".to_string();

    send_request(&client(), &req).await;

    assert_eq!(received_content_types(&server).await, vec!["application/json"]);
}

#[tokio::test]
async fn test_no_body_no_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut req = request(HttpMethod::GET, server.uri());
    req.headers.insert("X-Trace".to_string(), "abc".to_string());

    send_request(&client(), &req).await;

    let received = server.received_requests().await.unwrap();
    assert!(received[0].headers.get("content-type").is_none());
    assert_eq!(received[0].headers.get("x-trace").unwrap(), "abc");
}

// ============================================================================
// Response collection
// ============================================================================

#[tokio::test]
async fn test_error_status_is_a_response() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
        .mount(&server)
        .await;

    let response = send_request(&client(), &request(HttpMethod::DELETE, server.uri())).await;

    assert!(response.error.is_none());
    assert_eq!(response.status_code, 404);
    assert_eq!(response.status, "404 Not Found");
    assert_eq!(response.body, "missing");
}

#[tokio::test]
async fn test_multi_valued_headers_joined() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .append_header("x-multi", "a")
                .append_header("x-multi", "b"),
        )
        .mount(&server)
        .await;

    let response = send_request(&client(), &request(HttpMethod::GET, server.uri())).await;

    assert_eq!(response.headers["x-multi"], "a, b");
}

#[tokio::test]
async fn test_execute_request_reports_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let result = execute_request(&client(), &request(HttpMethod::GET, server.uri()), 7).await;

    let NetworkResponse::Completed { id, response, .. } = result;
    assert_eq!(id, 7);
    assert_eq!(response.body, "ok");
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_unreachable_host_is_failure() {
    let response = send_request(
        &client(),
        &request(HttpMethod::GET, "http://127.0.0.1:1/".to_string()),
    )
    .await;

    let error = response.error.expect("expected a failure");
    assert!(error.starts_with("Connection failed"), "{}", error);
}

#[tokio::test]
async fn test_malformed_url_is_failure() {
    let response = send_request(&client(), &request(HttpMethod::GET, "not a url".to_string())).await;

    let error = response.error.expect("expected a failure");
    assert!(error.starts_with("Invalid request"), "{}", error);
}

#[tokio::test]
async fn test_timeout_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let client = create_client(Duration::from_millis(200)).unwrap();
    let response = send_request(&client, &request(HttpMethod::GET, server.uri())).await;

    assert_eq!(response.error.as_deref(), Some("Request timed out"));
}
