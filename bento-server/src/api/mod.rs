//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`auth`] - employee and admin login/logout
//! - [`session`] - session introspection
//! - [`orders`] - employee ordering endpoints
//! - [`departments`] - department administration
//! - [`employees`] - employee administration
//! - [`windows`] - ordering-window administration
//! - [`admin_orders`] - admin order query and override
//! - [`statistics`] - admin reports
//!
//! Each module follows the same shape: `mod.rs` declares the router, and
//! `handler.rs` contains the handler functions.

pub mod admin_orders;
pub mod auth;
pub mod departments;
pub mod employees;
pub mod health;
pub mod orders;
pub mod session;
pub mod statistics;
pub mod windows;

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::{require_admin, require_auth};
use crate::core::ServerState;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Employee API - session required
        .merge(auth::router())
        .merge(orders::router())
        // Admin API - admin session required
        .merge(admin_router())
        // Public routes
        .merge(session::router())
        .merge(health::router())
}

fn admin_router() -> Router<ServerState> {
    Router::new()
        .merge(departments::router())
        .merge(employees::router())
        .merge(windows::router())
        .merge(admin_orders::router())
        .merge(statistics::router())
        .layer(axum_middleware::from_fn(require_admin))
}

/// Build the fully configured application with middleware and state
pub fn create_router(state: ServerState) -> Router {
    build_router()
        // CORS - the frontend is served from another origin in development;
        // credentials must be allowed for the session cookie
        .layer(CorsLayer::very_permissive())
        // Trace - request logging at INFO level
        .layer(TraceLayer::new_for_http())
        // Session authentication - injects CurrentUser for protected routes
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ))
        .with_state(state)
}
