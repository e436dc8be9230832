use std::path::PathBuf;
use std::time::Duration;

use crate::orders::{CutoffPolicy, DEFAULT_DINNER_CUTOFF, DEFAULT_LUNCH_CUTOFF};
use crate::utils::time::parse_cutoff;

/// Server configuration
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Purpose |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/bento | Working directory (data files, logs) |
/// | HTTP_PORT | 5000 | HTTP API port |
/// | LUNCH_CUTOFF | 08:30 | Lunch ordering deadline (HH:MM) |
/// | DINNER_CUTOFF | 16:00 | Dinner ordering deadline (HH:MM) |
/// | ADMIN_ACCOUNT | admin | Administrator account name |
/// | ADMIN_PASSWORD | 1234 | Administrator password |
/// | SESSION_TIMEOUT_MINUTES | 30 | Session idle timeout |
/// | ENVIRONMENT | development | development \| staging \| production |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/bento HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the data files and logs
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Lunch ordering deadline (HH:MM)
    pub lunch_cutoff: String,
    /// Dinner ordering deadline (HH:MM)
    pub dinner_cutoff: String,
    /// Administrator account name
    pub admin_account: String,
    /// Administrator password
    pub admin_password: String,
    /// Session idle timeout in minutes
    pub session_timeout_minutes: u64,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults for
    /// anything unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/bento".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            lunch_cutoff: std::env::var("LUNCH_CUTOFF").unwrap_or_else(|_| "08:30".into()),
            dinner_cutoff: std::env::var("DINNER_CUTOFF").unwrap_or_else(|_| "16:00".into()),
            admin_account: std::env::var("ADMIN_ACCOUNT").unwrap_or_else(|_| "admin".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "1234".into()),
            session_timeout_minutes: std::env::var("SESSION_TIMEOUT_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the settings tests care about
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Directory the JSON data files live in
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("data")
    }

    /// Cutoff times parsed from the configured strings; malformed values fall
    /// back to the defaults with a warning
    pub fn cutoff_policy(&self) -> CutoffPolicy {
        CutoffPolicy::new(
            parse_cutoff(&self.lunch_cutoff, DEFAULT_LUNCH_CUTOFF),
            parse_cutoff(&self.dinner_cutoff, DEFAULT_DINNER_CUTOFF),
        )
    }

    pub fn session_timeout(&self) -> Duration {
        Duration::from_secs(self.session_timeout_minutes * 60)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_cutoff_policy_from_strings() {
        let mut config = Config::with_overrides("/tmp/bento-test", 0);
        config.lunch_cutoff = "09:15".into();
        config.dinner_cutoff = "bogus".into();

        let policy = config.cutoff_policy();
        assert_eq!(policy.lunch, NaiveTime::from_hms_opt(9, 15, 0).unwrap());
        // Malformed value falls back to the default
        assert_eq!(policy.dinner, DEFAULT_DINNER_CUTOFF);
    }

    #[test]
    fn test_data_dir_under_work_dir() {
        let config = Config::with_overrides("/tmp/bento-test", 0);
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/bento-test/data"));
    }
}
