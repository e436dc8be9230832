//! Shared types for the Bento meal-ordering system
//!
//! Common types used across crates: error system, domain models, and the
//! request/response DTOs of the HTTP API.

pub mod client;
pub mod error;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
