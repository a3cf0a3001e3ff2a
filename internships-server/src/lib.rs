//! An in-memory stand-in for the internships backend, for running the portal
//! locally and for testing the client against something real.

use axum::{
    http::header::AUTHORIZATION,
    routing::{get, post},
    Router,
};
use std::{iter::once, time::Duration};
use tower_http::{compression, limit, sensitive_headers, timeout, trace};

/// Errors returned by handlers
pub mod error;

/// Request handlers
pub mod handlers;

/// Shared state
pub mod state;
pub use state::State;

/// Limits applied to every request.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    /// Request body size limit, in bytes
    pub body_limit: usize,

    /// How long a request may take
    pub request_timeout: Duration,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            body_limit: 5 * 1024 * 1024,
            request_timeout: Duration::from_secs(5),
        }
    }
}

/// Build the full app, ready to serve.
pub fn router(state: State, limits: Limits) -> Router {
    Router::new()
        // ROUTES
        .route(
            "/api/internships",
            get(handlers::internships::list).post(handlers::internships::create),
        )
        .route(
            "/api/internships/:id",
            get(handlers::internships::get_one)
                .put(handlers::internships::update)
                .delete(handlers::internships::remove),
        )
        .route("/api/admins", post(handlers::admins::create))
        // LAYERS
        .layer(trace::TraceLayer::new_for_http())
        .layer(compression::CompressionLayer::new())
        .layer(limit::RequestBodyLimitLayer::new(limits.body_limit))
        .layer(sensitive_headers::SetSensitiveHeadersLayer::new(once(
            AUTHORIZATION,
        )))
        .layer(timeout::TimeoutLayer::new(limits.request_timeout))
        // STATE
        .with_state(state)
}
