//! Order placement, cancellation and queries
//!
//! All business rules for the order book live here: cutoff enforcement,
//! overwrite-on-reorder, the weekly batch save and the admin override path.
//! Handlers stay thin and pass the current wall-clock time in, which keeps
//! every rule testable with a fixed clock.

pub mod cutoff;

pub use cutoff::{CutoffPolicy, DEFAULT_DINNER_CUTOFF, DEFAULT_LUNCH_CUTOFF};

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use shared::client::{
    CancelOrderRequest, CreateOrderRequest, UpdateOrderRequest, WeeklyOrdersRequest,
    WeeklyOrdersResult,
};
use shared::models::{MealOrder, MealType, OrderKey, OrderWithDate};
use shared::{AppError, AppResult, ErrorCode};

use crate::store::{EmployeeRepository, MealOrderRepository};
use crate::utils::time::{format_date, format_order_time};

/// Today's orders for one employee, with the live cutoff flags the ordering
/// screen needs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayOrders {
    pub date: NaiveDate,
    pub lunch: Option<MealOrder>,
    pub dinner: Option<MealOrder>,
    pub lunch_cut_off: bool,
    pub dinner_cut_off: bool,
}

/// Week selector for the weekly-orders view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekType {
    Current,
    Next,
    Month,
}

impl FromStr for WeekType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current" => Ok(Self::Current),
            "next" => Ok(Self::Next),
            "month" => Ok(Self::Month),
            other => Err(AppError::validation(format!("Unknown weekType: {}", other))),
        }
    }
}

/// Order book service
#[derive(Debug, Clone)]
pub struct OrderService {
    orders: MealOrderRepository,
    employees: EmployeeRepository,
    cutoff: CutoffPolicy,
}

impl OrderService {
    pub fn new(
        orders: MealOrderRepository,
        employees: EmployeeRepository,
        cutoff: CutoffPolicy,
    ) -> Self {
        Self {
            orders,
            employees,
            cutoff,
        }
    }

    pub fn cutoff_policy(&self) -> CutoffPolicy {
        self.cutoff
    }

    fn ensure_employee(&self, emp_id: &str) -> AppResult<()> {
        if self.employees.find_by_emp_id(emp_id).is_none() {
            return Err(
                AppError::new(ErrorCode::EmployeeNotFound).with_detail("empId", emp_id.to_string())
            );
        }
        Ok(())
    }

    /// Place or overwrite an order for the employee. Re-ordering the same
    /// date/meal replaces the previous choice.
    pub fn place_order(
        &self,
        emp_id: &str,
        req: &CreateOrderRequest,
        now: NaiveDateTime,
    ) -> AppResult<MealOrder> {
        self.ensure_employee(emp_id)?;
        let date = req.date.unwrap_or_else(|| now.date());
        self.cutoff.check(date, req.meal_type, now)?;

        let order = MealOrder {
            emp_id: emp_id.to_string(),
            meal_type: req.meal_type,
            diet_type: req.diet_type,
            rice_portion: req.rice_portion,
            is_ordered: true,
            order_time: format_order_time(now),
            admin_modified: false,
        };
        let key = OrderKey::new(date, emp_id, req.meal_type);
        self.orders.upsert(&key, order.clone())?;

        tracing::info!(emp_id, %key, "Order placed");
        Ok(order)
    }

    /// Cancel the employee's own order, subject to the same cutoff as placing
    pub fn cancel_order(
        &self,
        emp_id: &str,
        req: &CancelOrderRequest,
        now: NaiveDateTime,
    ) -> AppResult<()> {
        let date = req.date.unwrap_or_else(|| now.date());
        self.cutoff.check(date, req.meal_type, now)?;

        let key = OrderKey::new(date, emp_id, req.meal_type);
        if !self.orders.remove(&key)? {
            return Err(AppError::new(ErrorCode::OrderNotFound)
                .with_detail("date", format_date(date))
                .with_detail("mealType", req.meal_type.as_str()));
        }

        tracing::info!(emp_id, %key, "Order cancelled");
        Ok(())
    }

    /// Lunch and dinner for today plus the current cutoff flags
    pub fn today_orders(&self, emp_id: &str, now: NaiveDateTime) -> TodayOrders {
        let date = now.date();
        TodayOrders {
            date,
            lunch: self
                .orders
                .get(&OrderKey::new(date, emp_id, MealType::Lunch)),
            dinner: self
                .orders
                .get(&OrderKey::new(date, emp_id, MealType::Dinner)),
            lunch_cut_off: self.cutoff.is_cut_off(date, MealType::Lunch, now),
            dinner_cut_off: self.cutoff.is_cut_off(date, MealType::Dinner, now),
        }
    }

    /// Save a week's worth of slots in one call. Slots past their cutoff fail
    /// individually without aborting the batch; an empty diet or rice choice
    /// cancels the slot.
    pub fn save_weekly(
        &self,
        emp_id: &str,
        req: &WeeklyOrdersRequest,
        now: NaiveDateTime,
    ) -> AppResult<WeeklyOrdersResult> {
        self.ensure_employee(emp_id)?;
        let mut result = WeeklyOrdersResult {
            processed_count: req.orders.len(),
            success_count: 0,
            error_count: 0,
            errors: Vec::new(),
        };

        for slot in &req.orders {
            if let Err(e) = self.cutoff.check(slot.date, slot.meal_type, now) {
                result.error_count += 1;
                result.errors.push(e.message);
                continue;
            }

            let key = OrderKey::new(slot.date, emp_id, slot.meal_type);
            let outcome = match (slot.diet_type, slot.rice_portion) {
                (Some(diet_type), Some(rice_portion)) => self.orders.upsert(
                    &key,
                    MealOrder {
                        emp_id: emp_id.to_string(),
                        meal_type: slot.meal_type,
                        diet_type,
                        rice_portion,
                        is_ordered: true,
                        order_time: format_order_time(now),
                        admin_modified: false,
                    },
                ),
                // Cancelling a slot that was never ordered is a failed slot,
                // not a silent no-op
                _ => self.orders.remove(&key).and_then(|removed| {
                    if removed {
                        Ok(())
                    } else {
                        Err(AppError::with_message(
                            ErrorCode::OrderNotFound,
                            format!(
                                "No {} order for {}",
                                slot.meal_type.label(),
                                format_date(slot.date)
                            ),
                        ))
                    }
                }),
            };

            match outcome {
                Ok(()) => result.success_count += 1,
                Err(e) => {
                    result.error_count += 1;
                    result.errors.push(e.message);
                }
            }
        }

        tracing::info!(
            emp_id,
            succeeded = result.success_count,
            failed = result.error_count,
            "Weekly orders saved"
        );
        Ok(result)
    }

    /// Admin override: modify or remove an existing order regardless of cutoff.
    /// The modify path only rewrites the meal choices; it never creates.
    pub fn admin_update(&self, req: &UpdateOrderRequest) -> AppResult<()> {
        let emp_id = req.emp_id.trim().to_uppercase();
        if emp_id.is_empty() {
            return Err(AppError::required_field("empId"));
        }
        self.ensure_employee(&emp_id)?;
        let key = OrderKey::new(req.date, &emp_id, req.meal_type);

        if req.is_cancelled {
            if !self.orders.remove(&key)? {
                return Err(AppError::new(ErrorCode::OrderNotFound)
                    .with_detail("date", format_date(req.date))
                    .with_detail("mealType", req.meal_type.as_str()));
            }
            tracing::info!(%key, "Order removed by admin");
            return Ok(());
        }

        let (Some(diet_type), Some(rice_portion)) = (req.diet_type, req.rice_portion) else {
            return Err(AppError::validation(
                "dietType and ricePortion are required unless cancelling",
            ));
        };

        let mut order = self.orders.get(&key).ok_or_else(|| {
            AppError::new(ErrorCode::OrderNotFound)
                .with_detail("date", format_date(req.date))
                .with_detail("mealType", req.meal_type.as_str())
        })?;
        order.diet_type = diet_type;
        order.rice_portion = rice_portion;
        order.admin_modified = true;
        self.orders.upsert(&key, order)?;

        tracing::info!(%key, "Order overridden by admin");
        Ok(())
    }

    /// Scan the order book for an inclusive date range, optionally filtered by
    /// employee or department, sorted by date then employee
    pub fn orders_in_range(
        &self,
        date_from: NaiveDate,
        date_to: NaiveDate,
        emp_id: Option<&str>,
        dept_code: Option<&str>,
    ) -> Vec<OrderWithDate> {
        let emp_id = emp_id.map(|e| e.trim().to_uppercase());
        let dept_members: Option<Vec<String>> = dept_code.map(|code| {
            let code = code.trim().to_uppercase();
            self.employees
                .list()
                .into_iter()
                .filter(|e| e.dept_code == code)
                .map(|e| e.emp_id)
                .collect()
        });

        let mut orders: Vec<OrderWithDate> = self
            .orders
            .active_entries()
            .into_iter()
            .filter(|(key, _)| key.date >= date_from && key.date <= date_to)
            .filter(|(key, _)| emp_id.as_deref().is_none_or(|e| key.emp_id == e))
            .filter(|(key, _)| {
                dept_members
                    .as_ref()
                    .is_none_or(|members| members.contains(&key.emp_id))
            })
            .map(|(key, order)| OrderWithDate::from_order(key.date, &order))
            .collect();

        orders.sort_by(|a, b| (a.date, &a.emp_id, a.meal_type as u8).cmp(&(b.date, &b.emp_id, b.meal_type as u8)));
        orders
    }

    /// One employee's orders within the given week window
    pub fn weekly_orders(
        &self,
        emp_id: &str,
        week_type: WeekType,
        now: NaiveDateTime,
    ) -> Vec<OrderWithDate> {
        let (from, to) = week_range(now.date(), week_type);
        self.orders_in_range(from, to, Some(emp_id), None)
    }
}

/// Date window for a week selector.
///
/// The week runs Monday through Friday, located by offsetting from a
/// Sunday-based weekday number. On a Sunday this yields the *following*
/// Monday, which is the behavior ordering staff expect when planning ahead.
pub fn week_range(today: NaiveDate, week_type: WeekType) -> (NaiveDate, NaiveDate) {
    match week_type {
        WeekType::Month => {
            let first = today.with_day(1).unwrap_or(today);
            let last = first
                .checked_add_months(chrono::Months::new(1))
                .and_then(|d| d.pred_opt())
                .unwrap_or(today);
            (first, last)
        }
        WeekType::Current | WeekType::Next => {
            let days_from_sunday = today.weekday().num_days_from_sunday() as i64;
            let monday = today
                .checked_add_signed(chrono::Duration::days(1 - days_from_sunday))
                .unwrap_or(today);
            let monday = if week_type == WeekType::Next {
                monday.checked_add_days(Days::new(7)).unwrap_or(monday)
            } else {
                monday
            };
            let friday = monday.checked_add_days(Days::new(4)).unwrap_or(monday);
            (monday, friday)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::JsonStore;
    use shared::client::WeeklyOrderSlot;
    use shared::models::{DietType, RicePortion};
    use tempfile::TempDir;

    fn service() -> (TempDir, OrderService) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        let svc = OrderService::new(
            MealOrderRepository::new(store.clone()),
            EmployeeRepository::new(store),
            CutoffPolicy::default(),
        );
        (dir, svc)
    }

    fn at(date: (i32, u32, u32), h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn create_req(meal_type: MealType, date: Option<(i32, u32, u32)>) -> CreateOrderRequest {
        CreateOrderRequest {
            meal_type,
            diet_type: DietType::Meat,
            rice_portion: RicePortion::Full,
            date: date.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()),
        }
    }

    #[test]
    fn test_place_and_overwrite() {
        let (_dir, svc) = service();
        let now = at((2024, 3, 1), 7, 0);

        svc.place_order("93800", &create_req(MealType::Lunch, None), now)
            .unwrap();
        let mut req = create_req(MealType::Lunch, None);
        req.diet_type = DietType::Veg;
        svc.place_order("93800", &req, now).unwrap();

        let today = svc.today_orders("93800", now);
        assert_eq!(today.lunch.unwrap().diet_type, DietType::Veg);
        assert!(today.dinner.is_none());
        assert!(!today.lunch_cut_off);
    }

    #[test]
    fn test_place_after_cutoff_rejected() {
        let (_dir, svc) = service();
        let now = at((2024, 3, 1), 9, 0);
        let err = svc
            .place_order("93800", &create_req(MealType::Lunch, None), now)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderCutoffPassed);

        // Dinner is still open at 09:00
        svc.place_order("93800", &create_req(MealType::Dinner, None), now)
            .unwrap();
    }

    #[test]
    fn test_unknown_employee_rejected() {
        let (_dir, svc) = service();
        let now = at((2024, 3, 1), 7, 0);
        let err = svc
            .place_order("00000", &create_req(MealType::Lunch, None), now)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);
    }

    #[test]
    fn test_cancel_missing_order() {
        let (_dir, svc) = service();
        let now = at((2024, 3, 1), 7, 0);
        let err = svc
            .cancel_order(
                "93800",
                &CancelOrderRequest {
                    meal_type: MealType::Lunch,
                    date: None,
                },
                now,
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotFound);
    }

    #[test]
    fn test_cancel_after_cutoff_rejected() {
        let (_dir, svc) = service();
        svc.place_order(
            "93800",
            &create_req(MealType::Lunch, None),
            at((2024, 3, 1), 7, 0),
        )
        .unwrap();

        let err = svc
            .cancel_order(
                "93800",
                &CancelOrderRequest {
                    meal_type: MealType::Lunch,
                    date: None,
                },
                at((2024, 3, 1), 10, 0),
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderCutoffPassed);
    }

    #[test]
    fn test_weekly_batch_mixes_saves_and_cancels() {
        let (_dir, svc) = service();
        let now = at((2024, 3, 1), 7, 0); // Friday

        svc.place_order("93800", &create_req(MealType::Lunch, Some((2024, 3, 4))), now)
            .unwrap();

        let req = WeeklyOrdersRequest {
            orders: vec![
                // Cancel Monday's lunch (empty choices)
                WeeklyOrderSlot {
                    date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
                    meal_type: MealType::Lunch,
                    diet_type: None,
                    rice_portion: None,
                },
                // Place Tuesday's dinner
                WeeklyOrderSlot {
                    date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
                    meal_type: MealType::Dinner,
                    diet_type: Some(DietType::Veg),
                    rice_portion: Some(RicePortion::Half),
                },
                // Yesterday is past its cutoff
                WeeklyOrderSlot {
                    date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
                    meal_type: MealType::Lunch,
                    diet_type: Some(DietType::Meat),
                    rice_portion: Some(RicePortion::Full),
                },
            ],
        };

        let result = svc.save_weekly("93800", &req, now).unwrap();
        assert_eq!(result.processed_count, 3);
        assert_eq!(result.success_count, 2);
        assert_eq!(result.error_count, 1);
        assert_eq!(result.errors.len(), 1);

        let orders = svc.orders_in_range(
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
            Some("93800"),
            None,
        );
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].meal_type, MealType::Dinner);
    }

    #[test]
    fn test_weekly_cancel_of_unordered_slot_is_error() {
        let (_dir, svc) = service();
        let now = at((2024, 3, 1), 7, 0);

        // Nothing was ever ordered for this slot
        let req = WeeklyOrdersRequest {
            orders: vec![WeeklyOrderSlot {
                date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
                meal_type: MealType::Lunch,
                diet_type: None,
                rice_portion: None,
            }],
        };

        let result = svc.save_weekly("93800", &req, now).unwrap();
        assert_eq!(result.processed_count, 1);
        assert_eq!(result.success_count, 0);
        assert_eq!(result.error_count, 1);
        assert!(result.errors[0].contains("2024-03-04"));
    }

    #[test]
    fn test_admin_update_bypasses_cutoff() {
        let (_dir, svc) = service();
        svc.place_order(
            "93800",
            &create_req(MealType::Lunch, None),
            at((2024, 3, 1), 7, 0),
        )
        .unwrap();

        let evening = at((2024, 3, 1), 20, 0); // both meals closed
        svc.admin_update(&UpdateOrderRequest {
            date: evening.date(),
            emp_id: "93800".into(),
            meal_type: MealType::Lunch,
            diet_type: Some(DietType::Veg),
            rice_portion: Some(RicePortion::Half),
            is_cancelled: false,
        })
        .unwrap();

        let today = svc.today_orders("93800", evening);
        let lunch = today.lunch.unwrap();
        assert!(lunch.admin_modified);
        assert_eq!(lunch.diet_type, DietType::Veg);
        // The original placement time is kept
        assert_eq!(lunch.order_time, "07:00:00");

        svc.admin_update(&UpdateOrderRequest {
            date: evening.date(),
            emp_id: "93800".into(),
            meal_type: MealType::Lunch,
            diet_type: None,
            rice_portion: None,
            is_cancelled: true,
        })
        .unwrap();
        assert!(svc.today_orders("93800", evening).lunch.is_none());
    }

    #[test]
    fn test_admin_update_requires_existing_order() {
        let (_dir, svc) = service();

        // Modifying an order that was never placed is rejected, not created
        let err = svc
            .admin_update(&UpdateOrderRequest {
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                emp_id: "93800".into(),
                meal_type: MealType::Lunch,
                diet_type: Some(DietType::Meat),
                rice_portion: Some(RicePortion::Full),
                is_cancelled: false,
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotFound);
        assert!(
            svc.today_orders("93800", at((2024, 3, 1), 7, 0))
                .lunch
                .is_none()
        );

        // Cancelling a missing order is the same error
        let err = svc
            .admin_update(&UpdateOrderRequest {
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                emp_id: "93800".into(),
                meal_type: MealType::Lunch,
                diet_type: None,
                rice_portion: None,
                is_cancelled: true,
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotFound);
    }

    #[test]
    fn test_range_query_filters_by_department() {
        let (_dir, svc) = service();
        let now = at((2024, 3, 1), 7, 0);

        // 93800 is in A10, 28109 in B20 (seed data)
        svc.place_order("93800", &create_req(MealType::Lunch, None), now)
            .unwrap();
        svc.place_order("28109", &create_req(MealType::Lunch, None), now)
            .unwrap();

        let all = svc.orders_in_range(now.date(), now.date(), None, None);
        assert_eq!(all.len(), 2);
        // Sorted by date then employee
        assert_eq!(all[0].emp_id, "28109");

        let a10 = svc.orders_in_range(now.date(), now.date(), None, Some("a10"));
        assert_eq!(a10.len(), 1);
        assert_eq!(a10[0].emp_id, "93800");
    }

    #[test]
    fn test_week_range() {
        // Friday 2024-03-01 -> Mon 02-26 .. Fri 03-01
        let friday = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(
            week_range(friday, WeekType::Current),
            (
                NaiveDate::from_ymd_opt(2024, 2, 26).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
            )
        );
        assert_eq!(
            week_range(friday, WeekType::Next),
            (
                NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 8).unwrap()
            )
        );

        // Sunday maps to the following Monday, not the past one
        let sunday = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        assert_eq!(
            week_range(sunday, WeekType::Current),
            (
                NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 8).unwrap()
            )
        );

        assert_eq!(
            week_range(friday, WeekType::Month),
            (
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
            )
        );
    }
}
