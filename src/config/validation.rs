//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every route compiles (pattern, method, target names)
//! - Validate value ranges (timeouts > 0, parseable addresses)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use regex::Regex;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::config::schema::AppConfig;
use crate::routing::Method;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address is empty")]
    EmptyBindAddress,

    #[error("listener.bind_address {0:?} is not a socket address")]
    InvalidBindAddress(String),

    #[error("listener.request_timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("observability.log_level {0:?} is not a level (trace, debug, info, warn, error, off)")]
    UnknownLogLevel(String),

    #[error("observability.log_format {0:?} is not one of \"pretty\", \"compact\"")]
    UnknownLogFormat(String),

    #[error("routes[{index}]: invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        reason: String,
    },

    #[error("routes[{index}]: unsupported method {method:?}")]
    UnknownMethod { index: usize, method: String },

    #[error("routes[{index}]: controller is empty")]
    EmptyController { index: usize },

    #[error("routes[{index}]: action is empty")]
    EmptyAction { index: usize },
}

/// Check `config`, collecting every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let bind = config.listener.bind_address.trim();
    if bind.is_empty() {
        errors.push(ValidationError::EmptyBindAddress);
    } else if bind.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(bind.to_string()));
    }

    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.observability.log_level.parse::<LevelFilter>().is_err() {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    match config.observability.log_format.as_str() {
        "pretty" | "compact" => {}
        other => errors.push(ValidationError::UnknownLogFormat(other.to_string())),
    }

    for (index, route) in config.routes.iter().enumerate() {
        if let Err(e) = Regex::new(&route.pattern) {
            errors.push(ValidationError::InvalidPattern {
                index,
                pattern: route.pattern.clone(),
                reason: e.to_string(),
            });
        }
        if route.method.parse::<Method>().is_err() {
            errors.push(ValidationError::UnknownMethod {
                index,
                method: route.method.clone(),
            });
        }
        if route.controller.trim().is_empty() {
            errors.push(ValidationError::EmptyController { index });
        }
        if route.action.trim().is_empty() {
            errors.push(ValidationError::EmptyAction { index });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
