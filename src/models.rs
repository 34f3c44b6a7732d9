use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Header mapping shared by requests and responses
pub type HeaderMap = BTreeMap<String, String>;

/// HTTP Method enum
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    #[default]
    GET,
    POST,
    PUT,
    DELETE,
    PATCH,
    HEAD,
    OPTIONS,
}

impl HttpMethod {
    /// Selection order of the method field
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::GET,
        HttpMethod::POST,
        HttpMethod::PUT,
        HttpMethod::DELETE,
        HttpMethod::PATCH,
        HttpMethod::HEAD,
        HttpMethod::OPTIONS,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::OPTIONS => "OPTIONS",
        }
    }

    /// Position in [`HttpMethod::ALL`]
    pub fn index(&self) -> usize {
        HttpMethod::ALL
            .iter()
            .position(|m| m == self)
            .unwrap_or_default()
    }

    /// Method at a selection index, falling back to GET when out of range
    pub fn from_index(index: usize) -> HttpMethod {
        HttpMethod::ALL.get(index).copied().unwrap_or_default()
    }

    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::GET => reqwest::Method::GET,
            HttpMethod::POST => reqwest::Method::POST,
            HttpMethod::PUT => reqwest::Method::PUT,
            HttpMethod::DELETE => reqwest::Method::DELETE,
            HttpMethod::PATCH => reqwest::Method::PATCH,
            HttpMethod::HEAD => reqwest::Method::HEAD,
            HttpMethod::OPTIONS => reqwest::Method::OPTIONS,
        }
    }
}

/// A single HTTP request definition, persisted verbatim on save
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Save key; empty until the request is saved
    #[serde(default)]
    pub name: String,
    pub method: HttpMethod,
    pub url: String,
    #[serde(default)]
    pub headers: HeaderMap,
    /// Empty means "no body"
    #[serde(default)]
    pub body: String,
}

impl Request {
    /// `METHOD URL` summary line
    pub fn request_line(&self) -> String {
        format!("{} {}", self.method.as_str(), self.url)
    }
}

/// Result of the most recent send
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    pub status_code: u16,
    /// Status line, e.g. `200 OK`
    pub status: String,
    pub headers: HeaderMap,
    pub body: String,
    /// Set when the round trip did not complete; other fields are then meaningless
    pub error: Option<String>,
}

impl Response {
    pub fn failure(message: impl Into<String>) -> Self {
        Response {
            error: Some(message.into()),
            ..Response::default()
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_index_round_trip() {
        for (i, method) in HttpMethod::ALL.iter().enumerate() {
            assert_eq!(method.index(), i);
            assert_eq!(HttpMethod::from_index(i), *method);
        }
        assert_eq!(HttpMethod::from_index(99), HttpMethod::GET);
    }

    #[test]
    fn test_request_serializes_method_as_string() {
        let request = Request {
            name: "X".to_string(),
            method: HttpMethod::PUT,
            url: "https://a/b".to_string(),
            ..Request::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["method"], "PUT");
        assert_eq!(json["headers"], serde_json::json!({}));
    }

    #[test]
    fn test_failure_response() {
        let response = Response::failure("boom");
        assert!(response.is_failure());
        assert_eq!(response.status_code, 0);
    }
}
