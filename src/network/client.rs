//! HTTP client wrapper - executes requests and collects responses

use std::time::{Duration, Instant};

use reqwest::header::CONTENT_TYPE;

use crate::constants::DEFAULT_CONTENT_TYPE;
use crate::messages::NetworkResponse;
use crate::models::{HeaderMap, Request, Response};

/// Create an HTTP client with a fixed per-request deadline
pub fn create_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(timeout).build()
}

/// Build a request from the given definition
fn build_request(client: &reqwest::Client, request: &Request) -> reqwest::RequestBuilder {
    let mut req_builder = client.request(request.method.to_reqwest(), request.url.as_str());

    // Add body
    if !request.body.is_empty() {
        req_builder = req_builder.body(request.body.clone());
    }

    // A blank Content-Type counts as absent when there is a body
    let default_content_type = !request.body.is_empty() && !has_content_type(&request.headers);

    // Add headers
    for (key, value) in &request.headers {
        if default_content_type && is_content_type(key) {
            continue;
        }
        req_builder = req_builder.header(key.as_str(), value.as_str());
    }

    if default_content_type {
        req_builder = req_builder.header(CONTENT_TYPE, DEFAULT_CONTENT_TYPE);
    }

    req_builder
}

fn is_content_type(name: &str) -> bool {
    name.eq_ignore_ascii_case(CONTENT_TYPE.as_str())
}

fn has_content_type(headers: &HeaderMap) -> bool {
    headers
        .iter()
        .any(|(k, v)| is_content_type(k) && !v.trim().is_empty())
}

/// Perform one round trip. Any status code yields a normal response;
/// construction, transport and timeout errors yield [`Response::failure`].
pub async fn send_request(client: &reqwest::Client, request: &Request) -> Response {
    let resp = match build_request(client, request).send().await {
        Ok(resp) => resp,
        Err(e) => return Response::failure(describe_error(&e)),
    };

    let status = resp.status();
    let status_line = match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    };

    let mut headers = HeaderMap::new();
    for name in resp.headers().keys() {
        let joined = resp
            .headers()
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        headers.insert(name.as_str().to_string(), joined);
    }

    match resp.text().await {
        Ok(body) => Response {
            status_code: status.as_u16(),
            status: status_line,
            headers,
            body,
            error: None,
        },
        Err(e) => Response::failure(format!("Error reading body: {}", e)),
    }
}

/// Execute a request and wrap the result for the App layer
pub async fn execute_request(
    client: &reqwest::Client,
    request: &Request,
    request_id: u64,
) -> NetworkResponse {
    let start = Instant::now();
    let response = send_request(client, request).await;
    let elapsed = start.elapsed().as_millis() as u64;

    match &response.error {
        Some(message) => tracing::warn!(id = request_id, error = %message, "Request failed"),
        None => tracing::debug!(id = request_id, status = response.status_code, time_ms = elapsed, "Response received"),
    }

    NetworkResponse::Completed {
        id: request_id,
        response,
        time_ms: elapsed,
    }
}

fn describe_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Request timed out".to_string()
    } else if e.is_builder() {
        format!("Invalid request: {}", e)
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        format!("Request failed: {}", e)
    }
}
