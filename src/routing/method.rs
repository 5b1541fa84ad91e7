//! HTTP verbs a route can be registered for.

use std::fmt;
use std::str::FromStr;

use crate::routing::RouteError;

/// The verbs the router knows how to register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
}

impl Method {
    /// All supported verbs, in declaration order.
    pub const ALL: [Method; 4] = [Method::Get, Method::Put, Method::Post, Method::Delete];

    /// Uppercase wire form of the verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }

    /// Compare against a raw request verb, ignoring ASCII case.
    pub fn matches_verb(&self, verb: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(verb)
    }
}

impl FromStr for Method {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.matches_verb(s))
            .ok_or_else(|| RouteError::UnknownMethod(s.to_string()))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
