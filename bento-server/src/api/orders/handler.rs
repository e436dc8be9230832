use axum::Json;
use axum::extract::{Query, State};
use chrono::Local;
use serde::Deserialize;

use shared::client::{CancelOrderRequest, CreateOrderRequest, WeeklyOrdersRequest};
use shared::models::OrderWithDate;
use shared::{ApiResponse, AppResult};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::orders::{TodayOrders, WeekType};
use crate::utils::time::parse_date;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyQuery {
    #[serde(default)]
    week_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeQuery {
    date_from: String,
    date_to: String,
}

/// `GET /api/employee/today-orders`
pub async fn today_orders(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<ApiResponse<TodayOrders>>> {
    let emp_id = user.require_employee()?;
    let today = state.orders.today_orders(emp_id, Local::now().naive_local());
    Ok(Json(ApiResponse::success(today)))
}

/// `POST /api/employee/order`
pub async fn place_order(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(req): Json<CreateOrderRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    let emp_id = user.require_employee()?;
    state
        .orders
        .place_order(emp_id, &req, Local::now().naive_local())?;
    Ok(Json(ApiResponse::ok_with_message(format!(
        "{} order placed",
        req.meal_type.label()
    ))))
}

/// `POST /api/employee/cancel-order`
pub async fn cancel_order(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(req): Json<CancelOrderRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    let emp_id = user.require_employee()?;
    state
        .orders
        .cancel_order(emp_id, &req, Local::now().naive_local())?;
    Ok(Json(ApiResponse::ok_with_message(format!(
        "{} order cancelled",
        req.meal_type.label()
    ))))
}

/// `GET /api/employee/weekly-orders?weekType=current|next|month`
pub async fn weekly_orders(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<WeeklyQuery>,
) -> AppResult<Json<ApiResponse<Vec<OrderWithDate>>>> {
    let emp_id = user.require_employee()?;
    let week_type: WeekType = query.week_type.as_deref().unwrap_or("current").parse()?;
    let orders = state
        .orders
        .weekly_orders(emp_id, week_type, Local::now().naive_local());
    Ok(Json(ApiResponse::success(orders)))
}

/// `POST /api/employee/weekly-orders`
pub async fn save_weekly_orders(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(req): Json<WeeklyOrdersRequest>,
) -> AppResult<Json<ApiResponse<shared::client::WeeklyOrdersResult>>> {
    let emp_id = user.require_employee()?;
    let result = state
        .orders
        .save_weekly(emp_id, &req, Local::now().naive_local())?;
    Ok(Json(ApiResponse::success(result)))
}

/// `GET /api/employee/history?dateFrom&dateTo`
pub async fn history(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<RangeQuery>,
) -> AppResult<Json<ApiResponse<Vec<OrderWithDate>>>> {
    let emp_id = user.require_employee()?;
    let from = parse_date(&query.date_from)?;
    let to = parse_date(&query.date_to)?;
    let orders = state.orders.orders_in_range(from, to, Some(emp_id), None);
    Ok(Json(ApiResponse::success(orders)))
}
