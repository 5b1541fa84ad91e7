//! Controller subsystem.
//!
//! # Data Flow
//! ```text
//! Router::run (route matched)
//!     → registry.rs (controller name → Arc<dyn Controller>)
//!     → Controller::invoke(action, ActionContext)
//!     → context.rs (render / redirect onto the Response)
//! ```
//!
//! # Design Decisions
//! - Controllers are looked up by the name a route was registered with
//! - A response may be rendered at most once per request
//! - Errors travel back through the router untouched

pub mod base;
pub mod context;
pub mod registry;

pub use base::ControllerBase;
pub use context::ActionContext;
pub use registry::ControllerRegistry;

use thiserror::Error;

/// Anything that can serve an action for a matched route.
pub trait Controller: Send + Sync {
    fn invoke(&self, action: &str, ctx: &mut ActionContext<'_>) -> Result<(), ActionError>;
}

/// Errors raised by a controller action.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The controller has no action under this name.
    #[error("unknown action {0:?}")]
    UnknownAction(String),

    /// An action tried to build the response a second time.
    #[error("response already built")]
    DoubleRender,

    /// Serializing a JSON body failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Application-level failure reported by the action.
    #[error("{0}")]
    Failed(String),
}

impl ActionError {
    pub fn failed(message: impl Into<String>) -> Self {
        ActionError::Failed(message.into())
    }
}

/// Errors surfaced by `Router::run` after a route matched.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No controller registered under the route's controller name.
    #[error("controller {0:?} is not registered")]
    UnknownController(String),

    /// The action itself failed.
    #[error("{controller}#{action} failed: {source}")]
    Action {
        controller: String,
        action: String,
        #[source]
        source: ActionError,
    },
}

/// Built-in controller answering `status` with a plain `ok`.
pub fn health_controller() -> ControllerBase {
    ControllerBase::new().action("status", |ctx| ctx.render_text("ok"))
}
