//! A single registered route.

use std::fmt;

use regex::Regex;

use crate::http::Request;
use crate::routing::matcher::{Matcher, MethodMatcher, PatternMatcher};
use crate::routing::{Method, Params, RouteError};

/// Controller and action a matched route dispatches to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    pub controller: String,
    pub action: String,
}

impl Target {
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            action: action.into(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.controller, self.action)
    }
}

/// Pattern, method and target. Immutable once built.
#[derive(Debug, Clone)]
pub struct Route {
    pattern: PatternMatcher,
    method: MethodMatcher,
    target: Target,
}

impl Route {
    pub fn new(
        pattern: Regex,
        method: Method,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            pattern: PatternMatcher::new(pattern),
            method: MethodMatcher::new(method),
            target: Target::new(controller, action),
        }
    }

    /// Compile `pattern` and parse `method` before building the route.
    pub fn parse(
        pattern: &str,
        method: &str,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> Result<Self, RouteError> {
        let regex = Regex::new(pattern).map_err(|source| RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self::new(regex, method.parse()?, controller, action))
    }

    pub fn pattern(&self) -> &Regex {
        self.pattern.pattern()
    }

    pub fn method(&self) -> Method {
        self.method.method()
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn controller(&self) -> &str {
        &self.target.controller
    }

    pub fn action(&self) -> &str {
        &self.target.action
    }

    /// Named captures of this route's pattern against `path`.
    pub fn params(&self, path: &str) -> Params {
        Params::from_captures(self.pattern(), path)
    }
}

impl Matcher for Route {
    fn matches(&self, req: &Request) -> bool {
        self.method.matches(req) && self.pattern.matches(req)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<6} {} => {}",
            self.method().as_str(),
            self.pattern().as_str(),
            self.target
        )
    }
}
