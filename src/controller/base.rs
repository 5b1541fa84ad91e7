//! Controllers assembled from named action closures.

use std::collections::BTreeMap;
use std::fmt;

use crate::controller::{ActionContext, ActionError, Controller};

type Action = Box<dyn Fn(&mut ActionContext<'_>) -> Result<(), ActionError> + Send + Sync>;

/// A controller whose actions are closures keyed by name.
///
/// ```
/// use xanthus::controller::ControllerBase;
///
/// let users = ControllerBase::new()
///     .action("index", |ctx| ctx.render_text("all users"))
///     .action("show", |ctx| {
///         let id = ctx.param("id").unwrap_or_default().to_string();
///         ctx.render_text(format!("user {id}"))
///     });
/// assert!(users.has_action("show"));
/// ```
#[derive(Default)]
pub struct ControllerBase {
    actions: BTreeMap<String, Action>,
}

impl ControllerBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name`, replacing any earlier action with that name.
    pub fn action<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut ActionContext<'_>) -> Result<(), ActionError> + Send + Sync + 'static,
    {
        self.actions.insert(name.into(), Box::new(f));
        self
    }

    pub fn has_action(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }
}

impl Controller for ControllerBase {
    fn invoke(&self, action: &str, ctx: &mut ActionContext<'_>) -> Result<(), ActionError> {
        let f = self
            .actions
            .get(action)
            .ok_or_else(|| ActionError::UnknownAction(action.to_string()))?;
        f(ctx)
    }
}

impl fmt::Debug for ControllerBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerBase")
            .field("actions", &self.actions.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{Request, Response};
    use crate::routing::Params;

    #[test]
    fn test_invokes_named_action() {
        let controller = ControllerBase::new()
            .action("index", |ctx| ctx.render_text("index"))
            .action("create", |ctx| ctx.redirect_to("/"));

        let req = Request::new("GET", "/");
        let mut res = Response::new();
        let mut ctx = ActionContext::new(&req, &mut res, Params::new());
        controller.invoke("index", &mut ctx).unwrap();
        assert_eq!(res.body_text(), "index");
    }

    #[test]
    fn test_unknown_action() {
        let controller = ControllerBase::new();

        let req = Request::new("GET", "/");
        let mut res = Response::new();
        let mut ctx = ActionContext::new(&req, &mut res, Params::new());
        let err = controller.invoke("missing", &mut ctx).unwrap_err();
        assert!(matches!(err, ActionError::UnknownAction(a) if a == "missing"));
    }

    #[test]
    fn test_action_names_sorted() {
        let controller = ControllerBase::new()
            .action("show", |_| Ok(()))
            .action("index", |_| Ok(()));
        assert_eq!(controller.action_names().collect::<Vec<_>>(), vec!["index", "show"]);
    }
}
