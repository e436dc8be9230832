use axum::Json;
use axum::extract::{Path, State};

use shared::models::{Department, DepartmentSave};
use shared::{ApiResponse, AppResult};

use crate::core::ServerState;

/// `GET /api/admin/departments`
pub async fn list(State(state): State<ServerState>) -> Json<ApiResponse<Vec<Department>>> {
    Json(ApiResponse::success(state.departments.list()))
}

/// `POST /api/admin/departments` — create or update
pub async fn save(
    State(state): State<ServerState>,
    Json(req): Json<DepartmentSave>,
) -> AppResult<Json<ApiResponse<Department>>> {
    let dept = state.departments.save(req)?;
    Ok(Json(ApiResponse::success(dept)))
}

/// `DELETE /api/admin/departments/{oid}`
pub async fn remove(
    State(state): State<ServerState>,
    Path(oid): Path<u32>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.departments.delete(oid)?;
    Ok(Json(ApiResponse::ok()))
}
