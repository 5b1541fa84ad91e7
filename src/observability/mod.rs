//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (route matched / missed, dispatch failures)
//!     → spans per request carrying the request ID
//!
//! Consumers:
//!     → logging.rs (fmt subscriber on stdout)
//! ```
//!
//! # Design Decisions
//! - Structured fields (method, path, target) rather than formatted text
//! - Request ID flows through every dispatch span

pub mod logging;
