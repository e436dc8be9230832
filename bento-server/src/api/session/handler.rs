use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, header};

use shared::ApiResponse;
use shared::client::SessionInfo;

use crate::auth::session::token_from_cookie_header;
use crate::core::ServerState;

/// `GET /api/session/check-session`
///
/// Public endpoint: the frontend polls this on load to decide which screen to
/// show. An anonymous caller gets an OK response with no data rather than a
/// 401.
pub async fn check_session(
    State(state): State<ServerState>,
    headers: HeaderMap,
) -> Json<ApiResponse<SessionInfo>> {
    let user = headers
        .get(header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(token_from_cookie_header)
        .and_then(|token| state.sessions().resolve(token).ok());

    let body = match user {
        Some(user) => ApiResponse::success(user.session_info()),
        None => ApiResponse {
            code: Some(0),
            message: "Not authenticated".to_string(),
            data: None,
            details: None,
        },
    };
    Json(body)
}
