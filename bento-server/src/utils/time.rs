//! Time helpers — date parsing and cutoff-time handling
//!
//! All date strings use `%Y-%m-%d`; order timestamps use `%H:%M:%S`.
//! Date parsing happens at the API handler layer, the store only sees
//! already-typed values.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use shared::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Format a date as YYYY-MM-DD
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format the time-of-day part of a timestamp as HH:MM:SS
pub fn format_order_time(now: NaiveDateTime) -> String {
    now.format("%H:%M:%S").to_string()
}

/// Parse a cutoff time string (HH:MM), falling back to the given default
pub fn parse_cutoff(cutoff: &str, default: NaiveTime) -> NaiveTime {
    NaiveTime::parse_from_str(cutoff, "%H:%M").unwrap_or_else(|e| {
        tracing::warn!(
            "Failed to parse cutoff time '{}': {}, falling back to {}",
            cutoff,
            e,
            default.format("%H:%M")
        );
        default
    })
}
