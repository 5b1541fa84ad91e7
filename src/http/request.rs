//! In-process request model.
//!
//! # Responsibilities
//! - Carry the routing-relevant parts of a request (method, path)
//! - Hold decoded query parameters, headers and the buffered body
//! - Tag every request with a unique ID for log correlation
//!
//! # Design Decisions
//! - The method is kept as received; routes compare it case-insensitively
//! - Header names are lower-cased on insert

use std::collections::HashMap;

use axum::http::request::Parts;
use uuid::Uuid;

/// Header used to echo the request ID back to clients.
pub const X_REQUEST_ID: &str = "x-request-id";

/// A parsed request, independent of the transport.
#[derive(Debug, Clone)]
pub struct Request {
    id: Uuid,
    method: String,
    path: String,
    query: HashMap<String, String>,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl Request {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            method: method.into(),
            path: path.into(),
            query: HashMap::new(),
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Build from the head of an axum request and its buffered body.
    pub fn from_parts(parts: &Parts, body: Vec<u8>) -> Self {
        let mut request = Self::new(parts.method.as_str(), parts.uri.path());
        if let Some(query) = parts.uri.query() {
            request = request.with_query_string(query);
        }
        for (name, value) in &parts.headers {
            if let Ok(v) = value.to_str() {
                request.headers.insert(name.as_str().to_string(), v.to_string());
            } else {
                tracing::debug!(header = %name, "Skipping non-visible-ASCII header value");
            }
        }
        request.with_body(body)
    }

    /// Decode an `application/x-www-form-urlencoded` query string.
    /// A repeated key keeps its last value.
    pub fn with_query_string(mut self, query: &str) -> Self {
        for (k, v) in url::form_urlencoded::parse(query.as_bytes()) {
            self.query.insert(k.into_owned(), v.into_owned());
        }
        self
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// HTTP verb exactly as the client sent it.
    pub fn request_method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &HashMap<String, String> {
        &self.query
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_is_decoded() {
        let req = Request::new("GET", "/search").with_query_string("q=hello%20world&page=2&page=3");

        assert_eq!(req.query().get("q").map(String::as_str), Some("hello world"));
        assert_eq!(req.query().get("page").map(String::as_str), Some("3"));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let req = Request::new("GET", "/").with_header("Content-Type", "text/plain");
        assert_eq!(req.header("content-type"), Some("text/plain"));
        assert_eq!(req.header("CONTENT-TYPE"), Some("text/plain"));
    }

    #[test]
    fn test_from_parts() {
        let (parts, _) = axum::http::Request::builder()
            .method("DELETE")
            .uri("http://example.com/users/4?force=true")
            .header("Accept", "application/json")
            .body(())
            .unwrap()
            .into_parts();

        let req = Request::from_parts(&parts, b"payload".to_vec());
        assert_eq!(req.request_method(), "DELETE");
        assert_eq!(req.path(), "/users/4");
        assert_eq!(req.query().get("force").map(String::as_str), Some("true"));
        assert_eq!(req.header("accept"), Some("application/json"));
        assert_eq!(req.body(), b"payload");
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(Request::new("GET", "/").id(), Request::new("GET", "/").id());
    }
}
