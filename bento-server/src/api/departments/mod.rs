//! Department admin API module

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/admin/departments",
            get(handler::list).post(handler::save),
        )
        .route("/api/admin/departments/{oid}", delete(handler::remove))
}
