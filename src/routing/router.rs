//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store routes in registration order
//! - Look up the first route matching a request
//! - Dispatch to the target controller, or write a 404
//!
//! # Design Decisions
//! - O(n) scan, first match wins
//! - No validation or deduplication on registration
//! - Controller and action failures are returned unchanged

use std::sync::Arc;

use regex::Regex;

use crate::config::RouteConfig;
use crate::controller::{Controller, ControllerRegistry, DispatchError};
use crate::http::{Request, Response};
use crate::routing::matcher::Matcher;
use crate::routing::{Method, Route, RouteError};

/// Ordered route table plus the controllers it dispatches to.
#[derive(Debug, Default)]
pub struct Router {
    routes: Vec<Route>,
    controllers: ControllerRegistry,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a router from configured routes, keeping file order.
    pub fn from_config(configs: &[RouteConfig]) -> Result<Self, RouteError> {
        let mut router = Self::new();
        for config in configs {
            router.routes.push(Route::parse(
                &config.pattern,
                &config.method,
                config.controller.as_str(),
                config.action.as_str(),
            )?);
        }
        tracing::info!(routes = router.routes.len(), "Route table loaded");
        Ok(router)
    }

    /// Append a route. Always succeeds; duplicates are kept.
    pub fn add_route(
        &mut self,
        pattern: Regex,
        method: Method,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> &mut Self {
        self.routes.push(Route::new(pattern, method, controller, action));
        self
    }

    pub fn get(
        &mut self,
        pattern: Regex,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> &mut Self {
        self.add_route(pattern, Method::Get, controller, action)
    }

    pub fn put(
        &mut self,
        pattern: Regex,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> &mut Self {
        self.add_route(pattern, Method::Put, controller, action)
    }

    pub fn post(
        &mut self,
        pattern: Regex,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> &mut Self {
        self.add_route(pattern, Method::Post, controller, action)
    }

    pub fn delete(
        &mut self,
        pattern: Regex,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> &mut Self {
        self.add_route(pattern, Method::Delete, controller, action)
    }

    /// Run a route-table definition against this router.
    ///
    /// ```
    /// use regex::Regex;
    /// use xanthus::Router;
    ///
    /// let mut router = Router::new();
    /// router.draw(|r| {
    ///     r.get(Regex::new("^/users$").unwrap(), "UsersController", "index");
    ///     r.post(Regex::new("^/users$").unwrap(), "UsersController", "create");
    /// });
    /// assert_eq!(router.len(), 2);
    /// ```
    pub fn draw<F>(&mut self, routes: F) -> &mut Self
    where
        F: FnOnce(&mut Router),
    {
        routes(self);
        self
    }

    /// Like [`Router::draw`], for definitions that compile patterns with `?`.
    /// Routes registered before the error are kept.
    pub fn try_draw<F, E>(&mut self, routes: F) -> Result<&mut Self, E>
    where
        F: FnOnce(&mut Router) -> Result<(), E>,
    {
        routes(self)?;
        Ok(self)
    }

    pub fn register_controller<C>(&mut self, name: impl Into<String>, controller: C) -> &mut Self
    where
        C: Controller + 'static,
    {
        self.controllers.register(name, Arc::new(controller));
        self
    }

    pub fn controllers(&self) -> &ControllerRegistry {
        &self.controllers
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Drop every registered route. Controllers stay registered.
    pub fn clear(&mut self) {
        self.routes.clear();
    }

    /// First route, in registration order, that matches the request.
    pub fn match_request(&self, req: &Request) -> Option<&Route> {
        self.routes.iter().find(|route| route.matches(req))
    }

    /// Dispatch the request to its route's controller, or answer 404.
    pub fn run(&self, req: &Request, res: &mut Response) -> Result<(), DispatchError> {
        let Some(route) = self.match_request(req) else {
            tracing::warn!(
                method = %req.request_method(),
                path = %req.path(),
                "No route matched"
            );
            res.not_found();
            return Ok(());
        };

        tracing::debug!(
            method = %req.request_method(),
            path = %req.path(),
            target = %route.target(),
            "Route matched"
        );

        let params = route.params(req.path()).merge_query(req.query());
        self.controllers.dispatch(route.target(), req, res, params)
    }
}
