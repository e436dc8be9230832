//! Auth API module (employee and admin login/logout)

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/employee/login", post(handler::employee_login))
        .route("/api/employee/logout", post(handler::logout))
        .route("/api/admin/login", post(handler::admin_login))
        .route("/api/admin/logout", post(handler::logout))
}
