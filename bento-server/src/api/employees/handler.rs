use axum::Json;
use axum::extract::{Path, State};

use shared::models::{EmployeeSave, EmployeeView};
use shared::{ApiResponse, AppResult};

use crate::core::ServerState;

/// `GET /api/admin/employees`
///
/// Listings never expose the stored password, only its length.
pub async fn list(State(state): State<ServerState>) -> Json<ApiResponse<Vec<EmployeeView>>> {
    let views: Vec<EmployeeView> = state.employees.list().iter().map(EmployeeView::from).collect();
    Json(ApiResponse::success(views))
}

/// `POST /api/admin/employees` — create or update
pub async fn save(
    State(state): State<ServerState>,
    Json(req): Json<EmployeeSave>,
) -> AppResult<Json<ApiResponse<EmployeeView>>> {
    let employee = state.employees.save(req)?;
    Ok(Json(ApiResponse::success(EmployeeView::from(&employee))))
}

/// `DELETE /api/admin/employees/{oid}`
pub async fn remove(
    State(state): State<ServerState>,
    Path(oid): Path<u32>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.employees.delete(oid)?;
    Ok(Json(ApiResponse::ok()))
}
