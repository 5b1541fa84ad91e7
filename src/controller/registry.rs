//! Controller lookup by name.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::controller::{ActionContext, Controller, DispatchError};
use crate::http::{Request, Response};
use crate::routing::{Params, Target};

/// Map of controller name -> controller.
#[derive(Default, Clone)]
pub struct ControllerRegistry {
    controllers: HashMap<String, Arc<dyn Controller>>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register under `name`, replacing any earlier controller.
    pub fn register(&mut self, name: impl Into<String>, controller: Arc<dyn Controller>) {
        let name = name.into();
        if self.controllers.insert(name.clone(), controller).is_some() {
            tracing::debug!(controller = %name, "Replaced registered controller");
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.controllers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Invoke `target` with a fresh action context.
    pub fn dispatch(
        &self,
        target: &Target,
        req: &Request,
        res: &mut Response,
        params: Params,
    ) -> Result<(), DispatchError> {
        let controller = self
            .controllers
            .get(&target.controller)
            .ok_or_else(|| DispatchError::UnknownController(target.controller.clone()))?;

        let mut ctx = ActionContext::new(req, res, params);
        controller
            .invoke(&target.action, &mut ctx)
            .map_err(|source| DispatchError::Action {
                controller: target.controller.clone(),
                action: target.action.clone(),
                source,
            })
    }
}

impl fmt::Debug for ControllerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.controllers.keys().collect();
        names.sort();
        f.debug_struct("ControllerRegistry")
            .field("controllers", &names)
            .finish()
    }
}
