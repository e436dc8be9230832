use axum::Json;
use axum::extract::{Path, State};

use shared::models::{OrderWindow, OrderWindowSave};
use shared::{ApiResponse, AppResult};

use crate::core::ServerState;

/// `GET /api/admin/windows`
pub async fn list(State(state): State<ServerState>) -> Json<ApiResponse<Vec<OrderWindow>>> {
    Json(ApiResponse::success(state.windows.list()))
}

/// `POST /api/admin/windows` — create or update
pub async fn save(
    State(state): State<ServerState>,
    Json(req): Json<OrderWindowSave>,
) -> AppResult<Json<ApiResponse<OrderWindow>>> {
    let window = state.windows.save(req)?;
    Ok(Json(ApiResponse::success(window)))
}

/// `DELETE /api/admin/windows/{oid}`
pub async fn remove(
    State(state): State<ServerState>,
    Path(oid): Path<u32>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.windows.delete(oid)?;
    Ok(Json(ApiResponse::ok()))
}
