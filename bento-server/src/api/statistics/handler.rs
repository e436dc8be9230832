use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use shared::{ApiResponse, AppResult};

use crate::core::ServerState;
use crate::reports::{EmployeeOrderRow, MealQuantityRow};
use crate::utils::time::parse_date;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsQuery {
    date_from: String,
    date_to: String,
}

/// `GET /api/admin/stats/meal-quantity?dateFrom&dateTo`
pub async fn meal_quantity(
    State(state): State<ServerState>,
    Query(query): Query<StatsQuery>,
) -> AppResult<Json<ApiResponse<Vec<MealQuantityRow>>>> {
    let from = parse_date(&query.date_from)?;
    let to = parse_date(&query.date_to)?;
    Ok(Json(ApiResponse::success(state.reports.meal_quantity(from, to))))
}

/// `GET /api/admin/stats/employee-orders?dateFrom&dateTo`
pub async fn employee_orders(
    State(state): State<ServerState>,
    Query(query): Query<StatsQuery>,
) -> AppResult<Json<ApiResponse<Vec<EmployeeOrderRow>>>> {
    let from = parse_date(&query.date_from)?;
    let to = parse_date(&query.date_to)?;
    Ok(Json(ApiResponse::success(
        state.reports.employee_orders(from, to),
    )))
}
