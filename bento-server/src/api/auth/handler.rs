use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;

use shared::client::{AdminLoginRequest, EmployeeInfo, LoginRequest, LoginResponse};
use shared::{ApiResponse, AppError, AppResult};

use crate::auth::{CurrentUser, session::token_from_cookie_header};
use crate::core::ServerState;

/// `POST /api/employee/login`
///
/// Verifies the employee credentials and establishes a session cookie.
pub async fn employee_login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let employee = state
        .employees
        .find_by_emp_id(&req.emp_id)
        .filter(|e| e.verify_password(&req.password))
        .ok_or_else(|| {
            tracing::warn!(emp_id = %req.emp_id, "Employee login failed");
            AppError::invalid_credentials()
        })?;

    let user = CurrentUser::Employee {
        emp_id: employee.emp_id.clone(),
        name: employee.name.clone(),
        dept_code: employee.dept_code.clone(),
    };
    let token = state.sessions().create(user);

    tracing::info!(emp_id = %employee.emp_id, "Employee logged in");

    let body = ApiResponse::success(LoginResponse {
        employee: EmployeeInfo {
            emp_id: employee.emp_id,
            emp_name: employee.name,
            dept_code: employee.dept_code,
        },
    });
    Ok((
        AppendHeaders([(header::SET_COOKIE, state.sessions().cookie_for(token))]),
        Json(body),
    ))
}

/// `POST /api/admin/login`
///
/// Checks the configured administrator credentials.
pub async fn admin_login(
    State(state): State<ServerState>,
    Json(req): Json<AdminLoginRequest>,
) -> AppResult<impl IntoResponse> {
    if req.account != state.config.admin_account || req.password != state.config.admin_password {
        tracing::warn!(account = %req.account, "Admin login failed");
        return Err(AppError::invalid_credentials());
    }

    let token = state.sessions().create(CurrentUser::Admin {
        account: req.account.clone(),
    });

    tracing::info!(account = %req.account, "Admin logged in");

    Ok((
        AppendHeaders([(header::SET_COOKIE, state.sessions().cookie_for(token))]),
        Json(ApiResponse::ok_with_message("Logged in")),
    ))
}

/// `POST /api/employee/logout` and `POST /api/admin/logout`
///
/// Revokes the session and clears the cookie. Safe to call without one.
pub async fn logout(
    State(state): State<ServerState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if let Some(token) = headers
        .get(header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(token_from_cookie_header)
    {
        state.sessions().revoke(token);
    }

    (
        AppendHeaders([(header::SET_COOKIE, state.sessions().clear_cookie())]),
        Json(ApiResponse::ok_with_message("Logged out")),
    )
}
