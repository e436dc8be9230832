//! Department repository

use shared::models::{Department, DepartmentSave};
use shared::{AppError, AppResult, ErrorCode};

use super::{JsonStore, next_oid};

const FIRST_OID: u32 = 1;

/// Department data access with validation
#[derive(Debug, Clone)]
pub struct DepartmentRepository {
    store: JsonStore,
}

impl DepartmentRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// List all departments, ordered by oid
    pub fn list(&self) -> Vec<Department> {
        let mut depts = self.store.load_departments();
        depts.sort_by_key(|d| d.oid);
        depts
    }

    pub fn find_by_code(&self, code: &str) -> Option<Department> {
        let code = normalize_code(code);
        self.store
            .load_departments()
            .into_iter()
            .find(|d| d.code == code)
    }

    pub fn exists(&self, code: &str) -> bool {
        self.find_by_code(code).is_some()
    }

    /// Create (`oid = None`) or update (`oid = Some`) a department
    pub fn save(&self, payload: DepartmentSave) -> AppResult<Department> {
        let code = normalize_code(&payload.code);
        let name = payload.name.trim().to_string();

        if code.is_empty() {
            return Err(AppError::required_field("code"));
        }
        if name.is_empty() {
            return Err(AppError::required_field("name"));
        }

        let mut depts = self.store.load_departments();

        // Code must be unique, ignoring the record being updated
        if depts
            .iter()
            .any(|d| d.code == code && Some(d.oid) != payload.oid)
        {
            return Err(AppError::new(ErrorCode::DepartmentCodeExists)
                .with_detail("code", code));
        }

        let dept = match payload.oid {
            Some(oid) => {
                let existing = depts
                    .iter_mut()
                    .find(|d| d.oid == oid)
                    .ok_or_else(|| AppError::new(ErrorCode::DepartmentNotFound))?;
                existing.code = code;
                existing.name = name;
                existing.clone()
            }
            None => {
                let dept = Department {
                    oid: next_oid(depts.iter().map(|d| d.oid), FIRST_OID),
                    code,
                    name,
                };
                depts.push(dept.clone());
                dept
            }
        };

        self.store.save_departments(&depts)?;
        Ok(dept)
    }

    /// Delete by oid. Deleting a missing record is not an error.
    pub fn delete(&self, oid: u32) -> AppResult<()> {
        let mut depts = self.store.load_departments();
        depts.retain(|d| d.oid != oid);
        self.store.save_departments(&depts)?;
        Ok(())
    }
}

/// Natural keys are stored trimmed and uppercased
pub(crate) fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
