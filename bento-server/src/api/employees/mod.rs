//! Employee admin API module

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/admin/employees",
            get(handler::list).post(handler::save),
        )
        .route("/api/admin/employees/{oid}", delete(handler::remove))
}
