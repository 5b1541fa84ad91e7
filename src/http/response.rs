//! In-process response model.
//!
//! # Responsibilities
//! - Hold the status, headers and body an action produced
//! - Provide the router's not-found answer
//! - Convert into an axum response at the edge
//!
//! # Design Decisions
//! - `status` is a plain public field, actions and the router set it directly
//! - Headers are ordered for deterministic output
//! - Invalid statuses or header names degrade to 500 / are dropped with a warning

use std::collections::BTreeMap;

use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, StatusCode};

pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const APPLICATION_JSON: &str = "application/json";

const NOT_FOUND_BODY: &str = "Not Found";

/// Mutable response handed to the router and controller actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    headers: BTreeMap<String, String>,
    body: Vec<u8>,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            status: 200,
            headers: BTreeMap::new(),
            body: Vec::new(),
        }
    }
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn this response into a plain-text 404.
    pub fn not_found(&mut self) {
        self.status = 404;
        self.set_header("content-type", TEXT_PLAIN);
        self.set_body(NOT_FOUND_BODY);
    }

    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn set_body(&mut self, body: impl Into<Vec<u8>>) {
        self.body = body.into();
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body decoded as UTF-8, lossily.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl From<Response> for axum::response::Response {
    fn from(res: Response) -> Self {
        let status = StatusCode::from_u16(res.status).unwrap_or_else(|_| {
            tracing::warn!(status = res.status, "Invalid response status, sending 500");
            StatusCode::INTERNAL_SERVER_ERROR
        });

        let mut response = axum::response::Response::new(Body::from(res.body));
        *response.status_mut() = status;

        let headers = response.headers_mut();
        for (name, value) in res.headers {
            match (HeaderName::try_from(name.as_str()), HeaderValue::try_from(value.as_str())) {
                (Ok(n), Ok(v)) => {
                    headers.insert(n, v);
                }
                _ => tracing::warn!(header = %name, "Dropping invalid response header"),
            }
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let res = Response::new();
        assert_eq!(res.status, 200);
        assert!(res.body().is_empty());
        assert!(res.headers().is_empty());
    }

    #[test]
    fn test_not_found() {
        let mut res = Response::new();
        res.not_found();
        assert_eq!(res.status, 404);
        assert_eq!(res.body_text(), "Not Found");
        assert_eq!(res.header("Content-Type"), Some(TEXT_PLAIN));
    }

    #[test]
    fn test_into_axum_response() {
        let mut res = Response::new();
        res.status = 201;
        res.set_header("Location", "/users/1");
        res.set_header("bad header", "x");

        let converted: axum::response::Response = res.into();
        assert_eq!(converted.status(), StatusCode::CREATED);
        assert_eq!(converted.headers()["location"], "/users/1");
        assert_eq!(converted.headers().len(), 1);
    }

    #[test]
    fn test_invalid_status_becomes_500() {
        let mut res = Response::new();
        res.status = 42;

        let converted: axum::response::Response = res.into();
        assert_eq!(converted.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
