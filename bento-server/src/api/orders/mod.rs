//! Employee ordering API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employee", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/today-orders", get(handler::today_orders))
        .route("/order", post(handler::place_order))
        .route("/cancel-order", post(handler::cancel_order))
        .route(
            "/weekly-orders",
            get(handler::weekly_orders).post(handler::save_weekly_orders),
        )
        .route("/history", get(handler::history))
}
