//! Department Model

use serde::{Deserialize, Serialize};

/// Department master record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub oid: u32,
    /// Natural key, stored uppercased (e.g. "A10")
    pub code: String,
    pub name: String,
}

/// Save payload: `oid = None` creates, `oid = Some` updates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSave {
    #[serde(default)]
    pub oid: Option<u32>,
    pub code: String,
    pub name: String,
}
