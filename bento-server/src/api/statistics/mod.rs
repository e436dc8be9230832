//! Admin statistics API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin/stats", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/meal-quantity", get(handler::meal_quantity))
        .route("/employee-orders", get(handler::employee_orders))
}
