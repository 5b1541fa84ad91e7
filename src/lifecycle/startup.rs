//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the route table from validated configuration
//! - Register the built-in controllers
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Routes are frozen before the listener starts

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::controller::health_controller;
use crate::http::HttpServer;
use crate::routing::{RouteError, Router};

/// Name the built-in health controller is registered under.
pub const HEALTH_CONTROLLER: &str = "HealthController";

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("route table: {0}")]
    Routes(#[from] RouteError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Route table from config, with built-in controllers registered.
pub fn build_router(config: &AppConfig) -> Result<Router, StartupError> {
    let mut router = Router::from_config(&config.routes)?;
    router.register_controller(HEALTH_CONTROLLER, health_controller());

    for route in router.routes() {
        if !router.controllers().contains(route.controller()) {
            tracing::warn!(
                route = %route,
                "Route targets an unregistered controller; requests will fail at dispatch"
            );
        }
    }
    Ok(router)
}

/// Bind and serve until shutdown.
pub async fn start(config: AppConfig, router: Router) -> Result<(), StartupError> {
    let address = config.listener.bind_address.clone();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    tracing::info!(
        address = %config.listener.bind_address,
        routes = router.len(),
        request_timeout_secs = config.listener.request_timeout_secs,
        "Listening for connections"
    );

    HttpServer::new(&config.listener, router)
        .run(listener)
        .await
        .map_err(StartupError::Serve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RouteConfig;
    use crate::http::{Request, Response};

    #[test]
    fn test_build_router_registers_health() {
        let mut config = AppConfig::default();
        config
            .routes
            .push(RouteConfig::new("^/health$", "GET", HEALTH_CONTROLLER, "status"));
        let router = build_router(&config).unwrap();

        let mut res = Response::new();
        router.run(&Request::new("GET", "/health"), &mut res).unwrap();
        assert_eq!(res.status, 200);
        assert_eq!(res.body_text(), "ok");
    }

    #[test]
    fn test_build_router_rejects_bad_pattern() {
        let mut config = AppConfig::default();
        config.routes.push(RouteConfig::new("(", "GET", "A", "b"));
        assert!(matches!(build_router(&config), Err(StartupError::Routes(_))));
    }
}
