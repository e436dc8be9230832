//! Ordering-window admin API module

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/admin/windows", get(handler::list).post(handler::save))
        .route("/api/admin/windows/{oid}", delete(handler::remove))
}
