//! Per-meal ordering cutoffs
//!
//! Lunch closes at 08:30 and dinner at 16:00 by default; both are configurable.
//! A date in the past is always closed and a future date is always open; only
//! today compares against the clock. Ordering exactly at the cutoff second is
//! still allowed.

use chrono::{NaiveDateTime, NaiveTime};

use shared::models::MealType;
use shared::{AppError, AppResult};

use crate::utils::time::format_date;

/// Default lunch cutoff (08:30)
pub const DEFAULT_LUNCH_CUTOFF: NaiveTime = match NaiveTime::from_hms_opt(8, 30, 0) {
    Some(t) => t,
    None => unreachable!(),
};

/// Default dinner cutoff (16:00)
pub const DEFAULT_DINNER_CUTOFF: NaiveTime = match NaiveTime::from_hms_opt(16, 0, 0) {
    Some(t) => t,
    None => unreachable!(),
};

/// Cutoff times for both meals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutoffPolicy {
    pub lunch: NaiveTime,
    pub dinner: NaiveTime,
}

impl Default for CutoffPolicy {
    fn default() -> Self {
        Self {
            lunch: DEFAULT_LUNCH_CUTOFF,
            dinner: DEFAULT_DINNER_CUTOFF,
        }
    }
}

impl CutoffPolicy {
    pub fn new(lunch: NaiveTime, dinner: NaiveTime) -> Self {
        Self { lunch, dinner }
    }

    pub fn cutoff_for(&self, meal_type: MealType) -> NaiveTime {
        match meal_type {
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
        }
    }

    /// Whether ordering for `date`/`meal_type` is closed at `now`
    pub fn is_cut_off(&self, date: chrono::NaiveDate, meal_type: MealType, now: NaiveDateTime) -> bool {
        if date < now.date() {
            return true;
        }
        if date > now.date() {
            return false;
        }
        now.time() > self.cutoff_for(meal_type)
    }

    /// Reject mutation of a closed slot
    pub fn check(
        &self,
        date: chrono::NaiveDate,
        meal_type: MealType,
        now: NaiveDateTime,
    ) -> AppResult<()> {
        if self.is_cut_off(date, meal_type, now) {
            return Err(AppError::cutoff_passed(format!(
                "{} ordering for {} closed at {}",
                meal_type.label(),
                format_date(date),
                self.cutoff_for(meal_type).format("%H:%M")
            ))
            .with_detail("mealType", meal_type.as_str())
            .with_detail("date", format_date(date)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_exactly_at_cutoff_is_open() {
        let policy = CutoffPolicy::default();
        assert!(!policy.is_cut_off(today(), MealType::Lunch, at(8, 30, 0)));
        assert!(policy.is_cut_off(today(), MealType::Lunch, at(8, 30, 1)));
        assert!(!policy.is_cut_off(today(), MealType::Dinner, at(16, 0, 0)));
        assert!(policy.is_cut_off(today(), MealType::Dinner, at(16, 0, 1)));
    }

    #[test]
    fn test_past_closed_future_open() {
        let policy = CutoffPolicy::default();
        let yesterday = today().pred_opt().unwrap();
        let tomorrow = today().succ_opt().unwrap();
        // Even at midnight a past date is closed
        assert!(policy.is_cut_off(yesterday, MealType::Lunch, at(0, 0, 0)));
        // A future date is open even late at night
        assert!(!policy.is_cut_off(tomorrow, MealType::Dinner, at(23, 59, 59)));
    }

    #[test]
    fn test_lunch_closed_dinner_open_midday() {
        let policy = CutoffPolicy::default();
        let noon = at(12, 0, 0);
        assert!(policy.is_cut_off(today(), MealType::Lunch, noon));
        assert!(!policy.is_cut_off(today(), MealType::Dinner, noon));
    }

    #[test]
    fn test_check_error_carries_meal_detail() {
        let policy = CutoffPolicy::default();
        let err = policy
            .check(today(), MealType::Lunch, at(9, 0, 0))
            .unwrap_err();
        assert_eq!(err.code, shared::ErrorCode::OrderCutoffPassed);
        let details = err.details.unwrap();
        assert_eq!(details.get("mealType").unwrap(), "LUNCH");
    }
}
