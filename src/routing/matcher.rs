//! Route matching logic.
//!
//! # Responsibilities
//! - Match the request method (case-insensitive)
//! - Match the request path against a regular expression
//! - Combined by `Route` with AND semantics
//!
//! # Design Decisions
//! - Path matching uses `Regex::is_match`; anchors come from the pattern
//! - Captures are not inspected when deciding a match

use regex::Regex;

use crate::http::Request;
use crate::routing::Method;

/// Trait for matching requests against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the request matches this condition.
    fn matches(&self, req: &Request) -> bool;
}

/// Matches the request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodMatcher {
    method: Method,
}

impl MethodMatcher {
    pub fn new(method: Method) -> Self {
        Self { method }
    }

    pub fn method(&self) -> Method {
        self.method
    }
}

impl Matcher for MethodMatcher {
    fn matches(&self, req: &Request) -> bool {
        self.method.matches_verb(req.request_method())
    }
}

/// Matches the request path with a regular expression.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    pattern: Regex,
}

impl PatternMatcher {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl Matcher for PatternMatcher {
    fn matches(&self, req: &Request) -> bool {
        self.pattern.is_match(req.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_matcher() {
        let matcher = MethodMatcher::new(Method::Get);

        assert!(matcher.matches(&Request::new("GET", "/")));
        assert!(matcher.matches(&Request::new("get", "/"))); // Case insensitive
        assert!(!matcher.matches(&Request::new("POST", "/")));
    }

    #[test]
    fn test_pattern_matcher() {
        let matcher = PatternMatcher::new(Regex::new("^/users$").unwrap());

        assert!(matcher.matches(&Request::new("GET", "/users")));
        assert!(!matcher.matches(&Request::new("GET", "/users/1")));
        assert!(!matcher.matches(&Request::new("GET", "/USERS"))); // Case sensitive
    }

    #[test]
    fn test_unanchored_pattern_matches_anywhere() {
        let matcher = PatternMatcher::new(Regex::new("/users").unwrap());

        assert!(matcher.matches(&Request::new("GET", "/admin/users/1")));
    }
}
