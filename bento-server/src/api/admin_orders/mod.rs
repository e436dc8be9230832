//! Admin order query/override API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/admin/orders",
        get(handler::query).put(handler::update),
    )
}
