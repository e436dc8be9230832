use axum::Json;
use serde::Serialize;

use shared::ApiResponse;

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
}

/// `GET /api/health`
pub async fn health() -> Json<ApiResponse<impl Serialize>> {
    Json(ApiResponse::success(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}
