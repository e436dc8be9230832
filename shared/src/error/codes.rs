//! Unified error codes for the Bento meal-ordering system
//!
//! Error codes are shared between the server and any frontend so failures can
//! be matched programmatically. They are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 8xxx: Reference data errors (departments, employees, windows)
//! - 9xxx: System errors

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format (dates, times)
    InvalidFormat = 6,
    /// Required field missing or empty
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (employee id / password)
    InvalidCredentials = 1002,
    /// Session has expired
    SessionExpired = 1003,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin session required
    AdminRequired = 2002,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Ordering/cancelling past the cutoff time
    OrderCutoffPassed = 4002,
    /// Unknown meal type string
    InvalidMealType = 4003,

    // ==================== 8xxx: Reference data ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Employee id already exists
    EmployeeIdExists = 8002,
    /// Department not found
    DepartmentNotFound = 8101,
    /// Department code already exists
    DepartmentCodeExists = 8102,
    /// Ordering window not found
    WindowNotFound = 8201,
    /// Employee is already an ordering window
    WindowEmployeeExists = 8202,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Storage (JSON file) error
    StorageError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidFormat => "Invalid format",
            Self::RequiredField => "Required field is missing",

            Self::NotAuthenticated => "Please login first",
            Self::InvalidCredentials => "Invalid account or password",
            Self::SessionExpired => "Session has expired",

            Self::PermissionDenied => "Permission denied",
            Self::AdminRequired => "Admin privileges required",

            Self::OrderNotFound => "Order not found",
            Self::OrderCutoffPassed => "Ordering time has passed",
            Self::InvalidMealType => "Invalid meal type",

            Self::EmployeeNotFound => "Employee not found",
            Self::EmployeeIdExists => "Employee id already exists",
            Self::DepartmentNotFound => "Department not found",
            Self::DepartmentCodeExists => "Department code already exists",
            Self::WindowNotFound => "Ordering window not found",
            Self::WindowEmployeeExists => "Employee is already an ordering window",

            Self::InternalError => "Internal server error",
            Self::StorageError => "Storage error",
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::InvalidMealType => StatusCode::BAD_REQUEST,
            Self::NotFound
            | Self::OrderNotFound
            | Self::EmployeeNotFound
            | Self::DepartmentNotFound
            | Self::WindowNotFound => StatusCode::NOT_FOUND,
            Self::AlreadyExists
            | Self::EmployeeIdExists
            | Self::DepartmentCodeExists
            | Self::WindowEmployeeExists => StatusCode::CONFLICT,

            Self::NotAuthenticated | Self::InvalidCredentials | Self::SessionExpired => {
                StatusCode::UNAUTHORIZED
            }

            Self::PermissionDenied | Self::AdminRequired => StatusCode::FORBIDDEN,

            Self::OrderCutoffPassed => StatusCode::UNPROCESSABLE_ENTITY,

            Self::InternalError | Self::StorageError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            6 => Self::InvalidFormat,
            7 => Self::RequiredField,

            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1003 => Self::SessionExpired,

            2001 => Self::PermissionDenied,
            2002 => Self::AdminRequired,

            4001 => Self::OrderNotFound,
            4002 => Self::OrderCutoffPassed,
            4003 => Self::InvalidMealType,

            8001 => Self::EmployeeNotFound,
            8002 => Self::EmployeeIdExists,
            8101 => Self::DepartmentNotFound,
            8102 => Self::DepartmentCodeExists,
            8201 => Self::WindowNotFound,
            8202 => Self::WindowEmployeeExists,

            9001 => Self::InternalError,
            9002 => Self::StorageError,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::AdminRequired.code(), 2002);
        assert_eq!(ErrorCode::OrderCutoffPassed.code(), 4002);
        assert_eq!(ErrorCode::DepartmentCodeExists.code(), 8102);
        assert_eq!(ErrorCode::StorageError.code(), 9002);
    }

    #[test]
    fn test_round_trip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::NotAuthenticated,
            ErrorCode::AdminRequired,
            ErrorCode::OrderNotFound,
            ErrorCode::OrderCutoffPassed,
            ErrorCode::EmployeeNotFound,
            ErrorCode::WindowEmployeeExists,
            ErrorCode::InternalError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_invalid_code() {
        assert_eq!(ErrorCode::try_from(12345), Err(InvalidErrorCode(12345)));
    }

    #[test]
    fn test_http_status() {
        assert_eq!(
            ErrorCode::OrderNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorCode::NotAuthenticated.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ErrorCode::AdminRequired.http_status(), StatusCode::FORBIDDEN);
        assert_eq!(
            ErrorCode::OrderCutoffPassed.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ErrorCode::DepartmentCodeExists.http_status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_serde_as_u16() {
        let json = serde_json::to_string(&ErrorCode::OrderCutoffPassed).unwrap();
        assert_eq!(json, "4002");
        let code: ErrorCode = serde_json::from_str("8101").unwrap();
        assert_eq!(code, ErrorCode::DepartmentNotFound);
    }
}
