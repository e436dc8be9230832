//! Session Extractor
//!
//! Custom extractor resolving the session cookie to a [`CurrentUser`]

use axum::{extract::FromRequestParts, http::request::Parts};

use shared::AppError;

use crate::auth::{CurrentUser, session::token_from_cookie_header};
use crate::core::ServerState;

/// Use this extractor in protected handlers to resolve the session cookie
/// and obtain the current user
impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Check if already extracted (from middleware)
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let token = parts
            .headers
            .get(http::header::COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(token_from_cookie_header)
            .ok_or_else(AppError::not_authenticated)?;

        let user = state.sessions().resolve(token)?;

        // Store in extensions for potential reuse
        parts.extensions.insert(user.clone());
        Ok(user)
    }
}
