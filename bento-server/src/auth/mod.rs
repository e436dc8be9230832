//! Session authentication
//!
//! Cookie-based sessions backed by an in-memory token map:
//! - [`SessionService`] - session token store
//! - [`CurrentUser`] - authenticated principal
//! - [`require_auth`] - authentication middleware
//! - [`require_admin`] - admin-only middleware

pub mod extractor;
pub mod middleware;
pub mod session;

pub use middleware::{require_admin, require_auth};
pub use session::{CurrentUser, DEFAULT_SESSION_TIMEOUT, SESSION_COOKIE, SessionService};
