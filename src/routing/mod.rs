//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (linear scan in registration order)
//!     → route.rs (method + pattern via matcher.rs)
//!     → Return: first matching Route or None
//!
//! Dispatch:
//!     matched Route
//!     → params.rs (named captures + query string)
//!     → controller registry (controller#action)
//!     → no match: 404 written onto the response
//! ```
//!
//! # Design Decisions
//! - Routes are registered at startup, read-only while serving
//! - Regex patterns are anchored by the caller, never implicitly
//! - First match wins (registration order)
//! - Method comparison is case-insensitive

pub mod matcher;
pub mod method;
pub mod params;
pub mod route;
pub mod router;

pub use method::Method;
pub use params::Params;
pub use route::{Route, Target};
pub use router::Router;

use thiserror::Error;

/// Errors raised while building routes from untyped input.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Pattern failed to compile as a regular expression.
    #[error("invalid route pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Verb is not one of GET, PUT, POST, DELETE.
    #[error("unsupported HTTP method: {0:?}")]
    UnknownMethod(String),
}
