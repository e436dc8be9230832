//! Reporting queries for the admin screens
//!
//! Both reports are linear scans over the order book, aggregated in memory.
//! The dataset is one factory's lunches and dinners, so there is no need for
//! anything cleverer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use shared::models::{DietType, MealType, RicePortion};

use crate::store::{EmployeeRepository, MealOrderRepository};

/// One row of the meal-quantity report: how many of each exact meal the
/// kitchen must prepare
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealQuantityRow {
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub diet_type: DietType,
    pub rice_portion: RicePortion,
    pub count: usize,
}

/// One row of the per-employee report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeOrderRow {
    pub emp_id: String,
    pub name: String,
    pub dept_code: String,
    pub lunch_count: usize,
    pub dinner_count: usize,
    pub total_count: usize,
}

/// Report queries over the order book
#[derive(Debug, Clone)]
pub struct ReportService {
    orders: MealOrderRepository,
    employees: EmployeeRepository,
}

impl ReportService {
    pub fn new(orders: MealOrderRepository, employees: EmployeeRepository) -> Self {
        Self { orders, employees }
    }

    /// Counts per (date, meal, diet, rice) over an inclusive date range,
    /// ordered by date then meal
    pub fn meal_quantity(&self, date_from: NaiveDate, date_to: NaiveDate) -> Vec<MealQuantityRow> {
        let mut counts: BTreeMap<(NaiveDate, u8, u8, u8), (MealQuantityRow, usize)> =
            BTreeMap::new();

        for (key, order) in self.orders.active_entries() {
            if key.date < date_from || key.date > date_to {
                continue;
            }
            let bucket = (
                key.date,
                order.meal_type as u8,
                order.diet_type as u8,
                order.rice_portion as u8,
            );
            counts
                .entry(bucket)
                .or_insert_with(|| {
                    (
                        MealQuantityRow {
                            date: key.date,
                            meal_type: order.meal_type,
                            diet_type: order.diet_type,
                            rice_portion: order.rice_portion,
                            count: 0,
                        },
                        0,
                    )
                })
                .1 += 1;
        }

        counts
            .into_values()
            .map(|(mut row, n)| {
                row.count = n;
                row
            })
            .collect()
    }

    /// Per-employee lunch/dinner counts over an inclusive date range.
    /// Every employee on file appears, including those who ordered nothing.
    pub fn employee_orders(
        &self,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Vec<EmployeeOrderRow> {
        let mut rows: Vec<EmployeeOrderRow> = self
            .employees
            .list()
            .into_iter()
            .map(|e| EmployeeOrderRow {
                emp_id: e.emp_id,
                name: e.name,
                dept_code: e.dept_code,
                lunch_count: 0,
                dinner_count: 0,
                total_count: 0,
            })
            .collect();

        for (key, order) in self.orders.active_entries() {
            if key.date < date_from || key.date > date_to {
                continue;
            }
            if let Some(row) = rows.iter_mut().find(|r| r.emp_id == key.emp_id) {
                match order.meal_type {
                    MealType::Lunch => row.lunch_count += 1,
                    MealType::Dinner => row.dinner_count += 1,
                }
                row.total_count += 1;
            }
            // Orders for employees no longer on file are left out
        }

        rows
    }
}
