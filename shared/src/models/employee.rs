//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee master record
///
/// The password is stored as-is: authentication hardening is explicitly out
/// of scope for this system, and the store must round-trip the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub oid: u32,
    /// Natural key, stored uppercased (e.g. "93800")
    pub emp_id: String,
    pub name: String,
    pub password: String,
    /// Foreign key to [`Department::code`](super::Department)
    pub dept_code: String,
}

impl Employee {
    /// Plaintext password comparison
    pub fn verify_password(&self, password: &str) -> bool {
        self.password == password
    }
}

/// Save payload: `oid = None` creates, `oid = Some` updates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSave {
    #[serde(default)]
    pub oid: Option<u32>,
    pub emp_id: String,
    pub name: String,
    pub password: String,
    pub dept_code: String,
}

/// Employee as exposed to admin listings: the password is replaced by its
/// length so the UI can show a masked field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeView {
    pub oid: u32,
    pub emp_id: String,
    pub name: String,
    pub password_length: usize,
    pub dept_code: String,
}

impl From<&Employee> for EmployeeView {
    fn from(emp: &Employee) -> Self {
        Self {
            oid: emp.oid,
            emp_id: emp.emp_id.clone(),
            name: emp.name.clone(),
            password_length: emp.password.len(),
            dept_code: emp.dept_code.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_hides_password() {
        let emp = Employee {
            oid: 101,
            emp_id: "93800".into(),
            name: "林淑鈺".into(),
            password: "1234".into(),
            dept_code: "A10".into(),
        };
        let view = EmployeeView::from(&emp);
        assert_eq!(view.password_length, 4);
        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains("1234"));
    }
}
