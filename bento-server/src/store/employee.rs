//! Employee repository

use shared::models::{Employee, EmployeeSave};
use shared::{AppError, AppResult, ErrorCode};

use super::department::normalize_code;
use super::{DepartmentRepository, JsonStore, next_oid};

const FIRST_OID: u32 = 101;

/// Employee data access with validation
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    store: JsonStore,
}

impl EmployeeRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// List all employees, ordered by oid
    pub fn list(&self) -> Vec<Employee> {
        let mut employees = self.store.load_employees();
        employees.sort_by_key(|e| e.oid);
        employees
    }

    pub fn find_by_emp_id(&self, emp_id: &str) -> Option<Employee> {
        let emp_id = normalize_code(emp_id);
        self.store
            .load_employees()
            .into_iter()
            .find(|e| e.emp_id == emp_id)
    }

    /// Create (`oid = None`) or update (`oid = Some`) an employee
    pub fn save(&self, payload: EmployeeSave) -> AppResult<Employee> {
        let emp_id = normalize_code(&payload.emp_id);
        let name = payload.name.trim().to_string();
        let password = payload.password.trim().to_string();
        let dept_code = normalize_code(&payload.dept_code);

        if emp_id.is_empty() {
            return Err(AppError::required_field("empId"));
        }
        if name.is_empty() {
            return Err(AppError::required_field("name"));
        }
        if password.is_empty() {
            return Err(AppError::required_field("password"));
        }

        let dept_repo = DepartmentRepository::new(self.store.clone());
        if !dept_repo.exists(&dept_code) {
            return Err(AppError::new(ErrorCode::DepartmentNotFound)
                .with_detail("deptCode", dept_code));
        }

        let mut employees = self.store.load_employees();

        if employees
            .iter()
            .any(|e| e.emp_id == emp_id && Some(e.oid) != payload.oid)
        {
            return Err(AppError::new(ErrorCode::EmployeeIdExists).with_detail("empId", emp_id));
        }

        let employee = match payload.oid {
            Some(oid) => {
                let existing = employees
                    .iter_mut()
                    .find(|e| e.oid == oid)
                    .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;
                existing.emp_id = emp_id;
                existing.name = name;
                existing.password = password;
                existing.dept_code = dept_code;
                existing.clone()
            }
            None => {
                let employee = Employee {
                    oid: next_oid(employees.iter().map(|e| e.oid), FIRST_OID),
                    emp_id,
                    name,
                    password,
                    dept_code,
                };
                employees.push(employee.clone());
                employee
            }
        };

        self.store.save_employees(&employees)?;
        Ok(employee)
    }

    /// Delete by oid. Deleting a missing record is not an error.
    pub fn delete(&self, oid: u32) -> AppResult<()> {
        let mut employees = self.store.load_employees();
        employees.retain(|e| e.oid != oid);
        self.store.save_employees(&employees)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo() -> (TempDir, EmployeeRepository) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        (dir, EmployeeRepository::new(store))
    }

    #[test]
    fn test_create_assigns_oid_from_101() {
        let (_dir, repo) = repo();
        let emp = repo
            .save(EmployeeSave {
                oid: None,
                emp_id: " 50012 ".into(),
                name: "陳小明".into(),
                password: "abcd".into(),
                dept_code: "b20".into(),
            })
            .unwrap();
        assert_eq!(emp.oid, 104);
        assert_eq!(emp.emp_id, "50012");
        assert_eq!(emp.dept_code, "B20");
    }

    #[test]
    fn test_unknown_department_rejected() {
        let (_dir, repo) = repo();
        let err = repo
            .save(EmployeeSave {
                oid: None,
                emp_id: "50012".into(),
                name: "陳小明".into(),
                password: "abcd".into(),
                dept_code: "Z99".into(),
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DepartmentNotFound);
    }

    #[test]
    fn test_duplicate_emp_id_rejected() {
        let (_dir, repo) = repo();
        let err = repo
            .save(EmployeeSave {
                oid: None,
                emp_id: "93800".into(),
                name: "另一人".into(),
                password: "x".into(),
                dept_code: "A10".into(),
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmployeeIdExists);
    }

    #[test]
    fn test_update_password() {
        let (_dir, repo) = repo();
        let emp = repo
            .save(EmployeeSave {
                oid: Some(101),
                emp_id: "93800".into(),
                name: "林淑鈺".into(),
                password: "secret".into(),
                dept_code: "A10".into(),
            })
            .unwrap();
        assert!(emp.verify_password("secret"));
        assert_eq!(repo.list().len(), 3);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let (_dir, repo) = repo();
        repo.save(EmployeeSave {
            oid: None,
            emp_id: "AB12".into(),
            name: "測試".into(),
            password: "1".into(),
            dept_code: "A10".into(),
        })
        .unwrap();
        assert!(repo.find_by_emp_id(" ab12 ").is_some());
    }
}
