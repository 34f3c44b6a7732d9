//! Response viewer content
//!
//! Sections always appear in this order: request line, request headers,
//! request body, response status, response headers, response body.
//! Empty request headers/body and empty response headers are omitted.

use crate::models::{HeaderMap, Request, Response};

pub fn compose_response_view(request: &Request, response: &Response) -> String {
    let mut content = format!("Request:\n{}\n\n", request.request_line());

    if !request.headers.is_empty() {
        content.push_str("Request Headers:\n");
        push_headers(&mut content, &request.headers);
        content.push('\n');
    }

    if !request.body.is_empty() {
        content.push_str("Request Body:\n");
        content.push_str(&request.body);
        content.push_str("\n\n");
    }

    content.push_str(&format!("Response Status: {}\n\n", response.status));

    if !response.headers.is_empty() {
        content.push_str("Response Headers:\n");
        push_headers(&mut content, &response.headers);
        content.push('\n');
    }

    content.push_str("Response Body:\n");
    content.push_str(&response.body);
    content
}

fn push_headers(content: &mut String, headers: &HeaderMap) {
    for (key, value) in headers {
        content.push_str(&format!("{}: {}\n", key, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HttpMethod;

    #[test]
    fn test_sections_in_order() {
        let mut request = Request {
            method: HttpMethod::POST,
            url: "http://localhost/items".to_string(),
            body: "{\"a\":1}".to_string(),
            ..Request::default()
        };
        request.headers.insert("X-Req".to_string(), "1".to_string());

        let mut response = Response {
            status_code: 201,
            status: "201 Created".to_string(),
            body: "done".to_string(),
            ..Response::default()
        };
        response.headers.insert("x-res".to_string(), "2".to_string());

        let view = compose_response_view(&request, &response);
        let order = [
            "POST http://localhost/items",
            "X-Req: 1",
            "{\"a\":1}",
            "Response Status: 201 Created",
            "x-res: 2",
            "Response Body:\ndone",
        ];
        let positions: Vec<usize> = order.iter().map(|s| view.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_sections_omitted() {
        let request = Request {
            url: "http://x".to_string(),
            ..Request::default()
        };
        let response = Response {
            status_code: 200,
            status: "200 OK".to_string(),
            body: "ok".to_string(),
            ..Response::default()
        };
        let view = compose_response_view(&request, &response);
        assert!(!view.contains("Request Headers:"));
        assert!(!view.contains("Request Body:"));
        assert!(!view.contains("Response Headers:"));
        assert!(view.ends_with("Response Body:\nok"));
    }
}
