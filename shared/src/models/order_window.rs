//! Ordering Window Model
//!
//! An ordering window is an employee designated as responsible for placing
//! and managing orders on behalf of one or more departments.

use serde::{Deserialize, Serialize};

/// Ordering window record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderWindow {
    pub oid: u32,
    /// Foreign key to [`Employee::emp_id`](super::Employee)
    pub emp_id: String,
    /// Department codes this window may manage (non-empty)
    pub dept_codes: Vec<String>,
}

/// Save payload: `oid = None` creates, `oid = Some` updates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderWindowSave {
    #[serde(default)]
    pub oid: Option<u32>,
    pub emp_id: String,
    pub dept_codes: Vec<String>,
}
