//! Ordering window repository

use shared::models::{OrderWindow, OrderWindowSave};
use shared::{AppError, AppResult, ErrorCode};

use super::department::normalize_code;
use super::{DepartmentRepository, EmployeeRepository, JsonStore, next_oid};

const FIRST_OID: u32 = 1;

/// Ordering-window data access with validation
#[derive(Debug, Clone)]
pub struct OrderWindowRepository {
    store: JsonStore,
}

impl OrderWindowRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// List all windows, ordered by oid
    pub fn list(&self) -> Vec<OrderWindow> {
        let mut windows = self.store.load_windows();
        windows.sort_by_key(|w| w.oid);
        windows
    }

    /// Create (`oid = None`) or update (`oid = Some`) a window
    pub fn save(&self, payload: OrderWindowSave) -> AppResult<OrderWindow> {
        let emp_id = normalize_code(&payload.emp_id);
        let dept_codes: Vec<String> = payload
            .dept_codes
            .iter()
            .map(|c| normalize_code(c))
            .filter(|c| !c.is_empty())
            .collect();

        if emp_id.is_empty() {
            return Err(AppError::required_field("empId"));
        }
        if dept_codes.is_empty() {
            return Err(AppError::required_field("deptCodes"));
        }

        let emp_repo = EmployeeRepository::new(self.store.clone());
        if emp_repo.find_by_emp_id(&emp_id).is_none() {
            return Err(AppError::new(ErrorCode::EmployeeNotFound).with_detail("empId", emp_id));
        }

        let dept_repo = DepartmentRepository::new(self.store.clone());
        for code in &dept_codes {
            if !dept_repo.exists(code) {
                return Err(AppError::new(ErrorCode::DepartmentNotFound)
                    .with_detail("deptCode", code.clone()));
            }
        }

        let mut windows = self.store.load_windows();

        // One window per employee
        if windows
            .iter()
            .any(|w| w.emp_id == emp_id && Some(w.oid) != payload.oid)
        {
            return Err(AppError::new(ErrorCode::WindowEmployeeExists).with_detail("empId", emp_id));
        }

        let window = match payload.oid {
            Some(oid) => {
                let existing = windows
                    .iter_mut()
                    .find(|w| w.oid == oid)
                    .ok_or_else(|| AppError::new(ErrorCode::WindowNotFound))?;
                existing.emp_id = emp_id;
                existing.dept_codes = dept_codes;
                existing.clone()
            }
            None => {
                let window = OrderWindow {
                    oid: next_oid(windows.iter().map(|w| w.oid), FIRST_OID),
                    emp_id,
                    dept_codes,
                };
                windows.push(window.clone());
                window
            }
        };

        self.store.save_windows(&windows)?;
        Ok(window)
    }

    /// Delete by oid. Deleting a missing record is not an error.
    pub fn delete(&self, oid: u32) -> AppResult<()> {
        let mut windows = self.store.load_windows();
        windows.retain(|w| w.oid != oid);
        self.store.save_windows(&windows)?;
        Ok(())
    }
}
