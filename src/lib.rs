//! Xanthus request routing.
//!
//! Regular-expression routes matched in registration order, dispatched to
//! named controller actions, with a 404 when nothing matches.

pub mod config;
pub mod controller;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::AppConfig;
pub use controller::{ActionContext, ActionError, Controller, ControllerBase, DispatchError};
pub use http::{Request, Response};
pub use routing::{Method, Route, RouteError, Router};
