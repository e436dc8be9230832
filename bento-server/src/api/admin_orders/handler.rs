use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use shared::client::UpdateOrderRequest;
use shared::models::OrderWithDate;
use shared::{ApiResponse, AppResult};

use crate::core::ServerState;
use crate::utils::time::parse_date;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQuery {
    date_from: String,
    date_to: String,
    #[serde(default)]
    emp_id: Option<String>,
    #[serde(default)]
    dept_code: Option<String>,
}

/// `GET /api/admin/orders?dateFrom&dateTo[&empId][&deptCode]`
pub async fn query(
    State(state): State<ServerState>,
    Query(query): Query<OrderQuery>,
) -> AppResult<Json<ApiResponse<Vec<OrderWithDate>>>> {
    let from = parse_date(&query.date_from)?;
    let to = parse_date(&query.date_to)?;
    let orders = state.orders.orders_in_range(
        from,
        to,
        query.emp_id.as_deref(),
        query.dept_code.as_deref(),
    );
    Ok(Json(ApiResponse::success(orders)))
}

/// `PUT /api/admin/orders` — modify or cancel an existing order, ignoring
/// cutoffs
pub async fn update(
    State(state): State<ServerState>,
    Json(req): Json<UpdateOrderRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.orders.admin_update(&req)?;
    Ok(Json(ApiResponse::ok_with_message("Order updated")))
}
