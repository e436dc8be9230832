//! Utility module — common helpers
//!
//! - [`time`] — date/cutoff parsing and formatting
//! - [`logger`] — tracing subscriber setup

pub mod logger;
pub mod time;

// Re-export error types from shared for handler convenience
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
