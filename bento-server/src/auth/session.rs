//! In-memory session store
//!
//! Sessions are opaque UUID tokens handed out in an HttpOnly cookie and mapped
//! to the logged-in user through a [`DashMap`]. Every successful resolve
//! refreshes the idle timer; a session that sits unused past the timeout is
//! dropped on its next use. Sessions do not survive a server restart.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use uuid::Uuid;

use shared::client::SessionInfo;
use shared::{AppError, AppResult};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "bento_session";

/// Default idle timeout (30 minutes)
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// The authenticated principal attached to a request
#[derive(Debug, Clone, PartialEq)]
pub enum CurrentUser {
    Admin {
        account: String,
    },
    Employee {
        emp_id: String,
        name: String,
        dept_code: String,
    },
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin { .. })
    }

    /// Employee id, `None` for admin sessions
    pub fn emp_id(&self) -> Option<&str> {
        match self {
            Self::Admin { .. } => None,
            Self::Employee { emp_id, .. } => Some(emp_id),
        }
    }

    /// Require an employee principal, rejecting admin sessions
    pub fn require_employee(&self) -> AppResult<&str> {
        self.emp_id()
            .ok_or_else(|| AppError::forbidden("An employee session is required"))
    }

    pub fn session_info(&self) -> SessionInfo {
        match self {
            Self::Admin { account } => SessionInfo {
                is_admin: true,
                account: Some(account.clone()),
                emp_id: None,
                emp_name: None,
            },
            Self::Employee { emp_id, name, .. } => SessionInfo {
                is_admin: false,
                account: None,
                emp_id: Some(emp_id.clone()),
                emp_name: Some(name.clone()),
            },
        }
    }
}

#[derive(Debug, Clone)]
struct Session {
    user: CurrentUser,
    last_seen: Instant,
}

/// Session token service
///
/// Cheap to clone; all clones share the same map.
#[derive(Debug, Clone)]
pub struct SessionService {
    sessions: Arc<DashMap<Uuid, Session>>,
    timeout: Duration,
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TIMEOUT)
    }
}

impl SessionService {
    pub fn new(timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            timeout,
        }
    }

    /// Start a session for the user and return its token
    pub fn create(&self, user: CurrentUser) -> Uuid {
        let token = Uuid::new_v4();
        self.sessions.insert(
            token,
            Session {
                user,
                last_seen: Instant::now(),
            },
        );
        token
    }

    /// Resolve a token to its user, refreshing the idle timer.
    /// Unknown tokens and expired sessions are both authentication failures,
    /// distinguished by error code.
    pub fn resolve(&self, token: Uuid) -> AppResult<CurrentUser> {
        let Some(mut entry) = self.sessions.get_mut(&token) else {
            return Err(AppError::not_authenticated());
        };
        if entry.last_seen.elapsed() > self.timeout {
            drop(entry);
            self.sessions.remove(&token);
            return Err(AppError::session_expired());
        }
        entry.last_seen = Instant::now();
        Ok(entry.user.clone())
    }

    /// Drop a session. Revoking an unknown token is a no-op.
    pub fn revoke(&self, token: Uuid) {
        self.sessions.remove(&token);
    }

    pub fn active_count(&self) -> usize {
        self.sessions.len()
    }

    /// Set-Cookie value establishing the session
    pub fn cookie_for(&self, token: Uuid) -> String {
        format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, token)
    }

    /// Set-Cookie value clearing the session cookie
    pub fn clear_cookie(&self) -> String {
        format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE)
    }
}

/// Pull the session token out of a `Cookie` header value
pub fn token_from_cookie_header(header: &str) -> Option<Uuid> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.trim().parse().ok())?
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    fn employee() -> CurrentUser {
        CurrentUser::Employee {
            emp_id: "93800".into(),
            name: "林淑鈺".into(),
            dept_code: "A10".into(),
        }
    }

    #[test]
    fn test_create_resolve_revoke() {
        let svc = SessionService::default();
        let token = svc.create(employee());
        assert_eq!(svc.resolve(token).unwrap(), employee());

        svc.revoke(token);
        let err = svc.resolve(token).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotAuthenticated);
    }

    #[test]
    fn test_idle_timeout_expires_session() {
        let svc = SessionService::new(Duration::ZERO);
        let token = svc.create(employee());
        std::thread::sleep(Duration::from_millis(5));
        let err = svc.resolve(token).unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionExpired);
        // Expired sessions are removed eagerly
        assert_eq!(svc.active_count(), 0);
    }

    #[test]
    fn test_unknown_token_rejected() {
        let svc = SessionService::default();
        let err = svc.resolve(Uuid::new_v4()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotAuthenticated);
    }

    #[test]
    fn test_cookie_parsing() {
        let svc = SessionService::default();
        let token = svc.create(employee());

        let header = format!("theme=dark; {}; other=1", svc.cookie_for(token).split(';').next().unwrap());
        assert_eq!(token_from_cookie_header(&header), Some(token));
        assert_eq!(token_from_cookie_header("theme=dark"), None);
        assert_eq!(token_from_cookie_header("bento_session=not-a-uuid"), None);
    }

    #[test]
    fn test_admin_session_info() {
        let admin = CurrentUser::Admin {
            account: "admin".into(),
        };
        assert!(admin.is_admin());
        assert!(admin.require_employee().is_err());
        let info = admin.session_info();
        assert!(info.is_admin);
        assert_eq!(info.account.as_deref(), Some("admin"));
    }
}
