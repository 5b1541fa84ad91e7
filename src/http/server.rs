//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum app with a single fallback handler
//! - Wire up tracing and request timeout layers
//! - Buffer the body and convert to the in-process request model
//! - Run the route table and convert its response back

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use http_body_util::LengthLimitError;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ListenerConfig;
use crate::http::{Request, Response as XanthusResponse, X_REQUEST_ID};
use crate::lifecycle::signals::shutdown_signal;
use crate::routing::Router as XanthusRouter;

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<XanthusRouter>,
    pub max_body_bytes: usize,
}

/// HTTP front end for a route table.
pub struct HttpServer {
    app: Router,
}

impl HttpServer {
    /// The route table is frozen here: it is shared read-only from now on.
    pub fn new(config: &ListenerConfig, router: XanthusRouter) -> Self {
        let state = AppState {
            router: Arc::new(router),
            max_body_bytes: config.max_body_bytes,
        };
        let app = Self::build_app(config, state);
        Self { app }
    }

    #[allow(deprecated)]
    fn build_app(config: &ListenerConfig, state: AppState) -> Router {
        Router::new()
            .fallback(dispatch_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// The underlying Axum app, for driving it without a socket.
    pub fn app(&self) -> Router {
        self.app.clone()
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn dispatch_handler(State(state): State<AppState>, request: axum::http::Request<Body>) -> Response {
    let (parts, body) = request.into_parts();
    let body = match axum::body::to_bytes(body, state.max_body_bytes).await {
        Ok(bytes) => bytes.to_vec(),
        Err(e) => {
            let status = body_error_status(&e);
            tracing::warn!(error = %e, status = %status, path = %parts.uri.path(), "Failed to read request body");
            let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
                "Request body too large"
            } else {
                "Failed to read request body"
            };
            return (status, message).into_response();
        }
    };

    let request = Request::from_parts(&parts, body);
    let request_id = request.id().to_string();
    let span = tracing::info_span!(
        "dispatch",
        request_id = %request_id,
        method = %request.request_method(),
        path = %request.path(),
    );

    let mut res = XanthusResponse::new();
    let mut response = match span.in_scope(|| state.router.run(&request, &mut res)) {
        Ok(()) => Response::from(res),
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Dispatch failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    };

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(X_REQUEST_ID, value);
    }
    response
}

/// 413 when the body hit `max_body_bytes`, 400 for any other read failure.
fn body_error_status(err: &axum::Error) -> StatusCode {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = source {
        if e.is::<LengthLimitError>() {
            return StatusCode::PAYLOAD_TOO_LARGE;
        }
        source = e.source();
    }
    StatusCode::BAD_REQUEST
}
