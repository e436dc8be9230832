//! Client-related types shared between server and client
//!
//! Common request/response types used in API communication.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DietType, MealType, RicePortion};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Employee login request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub emp_id: String,
    pub password: String,
}

/// Admin login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub account: String,
    pub password: String,
}

/// Employee information returned after login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInfo {
    pub emp_id: String,
    pub emp_name: String,
    pub dept_code: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub employee: EmployeeInfo,
}

/// Current session information (`GET /api/session/check-session`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub is_admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emp_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emp_name: Option<String>,
}

// =============================================================================
// Order API DTOs
// =============================================================================

/// Place-order request (employee)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub meal_type: MealType,
    pub diet_type: DietType,
    pub rice_portion: RicePortion,
    /// Defaults to today when absent
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Cancel-order request (employee)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    pub meal_type: MealType,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// One slot of a weekly batch save. Empty diet or rice portion means
/// "cancel this slot".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyOrderSlot {
    pub date: NaiveDate,
    pub meal_type: MealType,
    #[serde(default)]
    pub diet_type: Option<DietType>,
    #[serde(default)]
    pub rice_portion: Option<RicePortion>,
}

/// Weekly batch save request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyOrdersRequest {
    pub orders: Vec<WeeklyOrderSlot>,
}

/// Result of a weekly batch save
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyOrdersResult {
    /// Total slots in the request
    pub processed_count: usize,
    pub success_count: usize,
    pub error_count: usize,
    /// One message per failed slot
    pub errors: Vec<String>,
}

/// Admin order override request (`PUT /api/admin/orders`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub date: NaiveDate,
    pub emp_id: String,
    pub meal_type: MealType,
    #[serde(default)]
    pub diet_type: Option<DietType>,
    #[serde(default)]
    pub rice_portion: Option<RicePortion>,
    /// True removes the order instead of modifying it
    #[serde(default)]
    pub is_cancelled: bool,
}
