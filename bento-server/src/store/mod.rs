//! JSON-file store and repositories
//!
//! One JSON file per entity type under the data directory:
//!
//! | File | Contents |
//! |------|----------|
//! | `departments.json` | `Vec<Department>` |
//! | `employees.json` | `Vec<Employee>` |
//! | `windows.json` | `Vec<OrderWindow>` |
//! | `orders.json` | `HashMap<String, MealOrder>` keyed by `date_empid_meal` |
//!
//! Every read reloads the whole file and every write rewrites it. There is no
//! locking and no transaction: the system assumes a single writer and a small
//! dataset. A missing or unreadable file loads as the empty collection.

pub mod department;
pub mod employee;
pub mod meal_order;
pub mod order_window;

// Re-exports
pub use department::DepartmentRepository;
pub use employee::EmployeeRepository;
pub use meal_order::MealOrderRepository;
pub use order_window::OrderWindowRepository;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use shared::models::{Department, Employee, MealOrder, OrderWindow};
use shared::{AppError, ErrorCode};

const DEPARTMENTS_FILE: &str = "departments.json";
const EMPLOYEES_FILE: &str = "employees.json";
const WINDOWS_FILE: &str = "windows.json";
const ORDERS_FILE: &str = "orders.json";

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::with_message(ErrorCode::StorageError, err.to_string())
    }
}

/// Flat JSON-file store
///
/// Cheap to clone: holds only the data directory path. Repositories wrap this
/// with per-entity validation.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    /// Open the store, creating the data directory and seeding default
    /// reference data for any missing file
    pub fn open(data_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let store = Self {
            data_dir: data_dir.into(),
        };
        fs::create_dir_all(&store.data_dir)?;
        store.seed_defaults()?;
        Ok(store)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Load a collection, treating a missing or corrupt file as empty
    fn load<T: DeserializeOwned + Default>(&self, file: &str) -> T {
        let path = self.path(file);
        match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                tracing::warn!(file = %path.display(), error = %e, "Corrupt store file, treating as empty");
                T::default()
            }),
            Err(_) => T::default(),
        }
    }

    /// Rewrite a whole collection, pretty-printed
    fn save<T: Serialize>(&self, file: &str, data: &T) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(data)?;
        fs::write(self.path(file), json)?;
        Ok(())
    }

    // ==================== Typed accessors ====================

    pub fn load_departments(&self) -> Vec<Department> {
        self.load(DEPARTMENTS_FILE)
    }

    pub fn save_departments(&self, depts: &[Department]) -> StoreResult<()> {
        self.save(DEPARTMENTS_FILE, &depts)
    }

    pub fn load_employees(&self) -> Vec<Employee> {
        self.load(EMPLOYEES_FILE)
    }

    pub fn save_employees(&self, employees: &[Employee]) -> StoreResult<()> {
        self.save(EMPLOYEES_FILE, &employees)
    }

    pub fn load_windows(&self) -> Vec<OrderWindow> {
        self.load(WINDOWS_FILE)
    }

    pub fn save_windows(&self, windows: &[OrderWindow]) -> StoreResult<()> {
        self.save(WINDOWS_FILE, &windows)
    }

    pub fn load_orders(&self) -> HashMap<String, MealOrder> {
        self.load(ORDERS_FILE)
    }

    pub fn save_orders(&self, orders: &HashMap<String, MealOrder>) -> StoreResult<()> {
        self.save(ORDERS_FILE, &orders)
    }

    /// Write default reference data for any file that does not exist yet
    fn seed_defaults(&self) -> StoreResult<()> {
        if !self.path(DEPARTMENTS_FILE).exists() {
            let defaults = vec![
                Department {
                    oid: 1,
                    code: "A10".into(),
                    name: "生產部".into(),
                },
                Department {
                    oid: 2,
                    code: "B20".into(),
                    name: "倉儲部".into(),
                },
                Department {
                    oid: 3,
                    code: "C30".into(),
                    name: "行政部".into(),
                },
            ];
            self.save_departments(&defaults)?;
        }

        if !self.path(EMPLOYEES_FILE).exists() {
            let defaults = vec![
                Employee {
                    oid: 101,
                    emp_id: "93800".into(),
                    name: "林淑鈺".into(),
                    password: "1234".into(),
                    dept_code: "A10".into(),
                },
                Employee {
                    oid: 102,
                    emp_id: "28109".into(),
                    name: "詹金璋".into(),
                    password: "1234".into(),
                    dept_code: "B20".into(),
                },
                Employee {
                    oid: 103,
                    emp_id: "2400305".into(),
                    name: "王瀚章".into(),
                    password: "1234".into(),
                    dept_code: "C30".into(),
                },
            ];
            self.save_employees(&defaults)?;
        }

        if !self.path(WINDOWS_FILE).exists() {
            let defaults = vec![OrderWindow {
                oid: 1,
                emp_id: "28109".into(),
                dept_codes: vec!["A10".into(), "C30".into()],
            }];
            self.save_windows(&defaults)?;
        }

        if !self.path(ORDERS_FILE).exists() {
            self.save_orders(&HashMap::new())?;
        }

        Ok(())
    }
}

/// Next oid for a list of records: max + 1, or `first` for an empty list
pub(crate) fn next_oid(existing: impl Iterator<Item = u32>, first: u32) -> u32 {
    existing.max().map(|max| max + 1).unwrap_or(first)
}
