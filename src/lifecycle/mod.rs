//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build route table → Start listener
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Graceful shutdown of the HTTP server
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then routes, then listener
//! - Route table is never mutated after the listener starts

pub mod signals;
pub mod startup;
