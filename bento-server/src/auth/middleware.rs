//! Authentication middleware
//!
//! Axum middleware resolving the session cookie for all protected routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use shared::AppError;

use crate::auth::{CurrentUser, session::token_from_cookie_header};
use crate::core::ServerState;

/// Authentication middleware requiring a live session
///
/// Resolves the `bento_session` cookie and injects [`CurrentUser`] into the
/// request extensions on success.
///
/// # Paths that skip authentication
///
/// - `OPTIONS *` (CORS preflight)
/// - anything outside `/api/`
/// - the login endpoints, `/api/session/check-session` and `/api/health`
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // Allow CORS preflight through
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Non-API routes fall through to their own 404
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if is_public_api_route(path) {
        return Ok(next.run(req).await);
    }

    let token = req
        .headers()
        .get(http::header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(token_from_cookie_header);

    let Some(token) = token else {
        tracing::warn!(path, "Request without session cookie");
        return Err(AppError::not_authenticated());
    };

    match state.sessions().resolve(token) {
        Ok(user) => {
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(path, code = %e.code, "Session rejected");
            Err(e)
        }
    }
}

/// Authorization middleware restricting a subtree to admin sessions
///
/// Must run after [`require_auth`], which provides the [`CurrentUser`]
/// extension.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    // Preflight and public paths were already let through by require_auth
    if req.method() == http::Method::OPTIONS || is_public_api_route(req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or_else(AppError::not_authenticated)?;

    if !user.is_admin() {
        tracing::warn!(path = req.uri().path(), "Admin route denied");
        return Err(AppError::admin_required());
    }

    Ok(next.run(req).await)
}

fn is_public_api_route(path: &str) -> bool {
    matches!(
        path,
        "/api/employee/login" | "/api/admin/login" | "/api/session/check-session" | "/api/health"
    )
}
