//! Meal order model and meal enums
//!
//! Orders have no independent identity: the composite key
//! `"{date}_{emp_id}_{meal_type}"` is the primary key, and the whole order
//! book is a flat map from key to [`MealOrder`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Meal type (which meal of the day)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealType {
    Lunch,
    Dinner,
}

impl MealType {
    /// Human-readable meal name for messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lunch => "LUNCH",
            Self::Dinner => "DINNER",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LUNCH" => Ok(Self::Lunch),
            "DINNER" => Ok(Self::Dinner),
            other => Err(format!("unknown meal type: {}", other)),
        }
    }
}

/// Diet type (meat or vegetarian)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DietType {
    Meat,
    Veg,
}

/// Rice portion size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RicePortion {
    Full,
    Half,
}

/// Composite order key: date + employee + meal type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderKey {
    pub date: NaiveDate,
    pub emp_id: String,
    pub meal_type: MealType,
}

impl OrderKey {
    pub fn new(date: NaiveDate, emp_id: impl Into<String>, meal_type: MealType) -> Self {
        Self {
            date,
            emp_id: emp_id.into(),
            meal_type,
        }
    }

    /// Parse a stored key string. Malformed keys return `None` and are
    /// skipped by scans, matching the tolerance of the flat-file format.
    pub fn parse(key: &str) -> Option<Self> {
        let parts: Vec<&str> = key.split('_').collect();
        if parts.len() != 3 {
            return None;
        }
        let date = NaiveDate::parse_from_str(parts[0], "%Y-%m-%d").ok()?;
        let meal_type = parts[2].parse().ok()?;
        Some(Self {
            date,
            emp_id: parts[1].to_string(),
            meal_type,
        })
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}",
            self.date.format("%Y-%m-%d"),
            self.emp_id,
            self.meal_type
        )
    }
}

/// A single meal order as stored in the order book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealOrder {
    pub emp_id: String,
    pub meal_type: MealType,
    pub diet_type: DietType,
    pub rice_portion: RicePortion,
    /// False marks a tombstone left by older data; scans skip these
    pub is_ordered: bool,
    /// Time of day the order was placed (`HH:MM:SS`)
    pub order_time: String,
    /// True when the record was created or last touched by an admin override
    pub admin_modified: bool,
}

/// An order joined with its date, as returned by range queries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithDate {
    pub date: NaiveDate,
    pub emp_id: String,
    pub meal_type: MealType,
    pub diet_type: DietType,
    pub rice_portion: RicePortion,
    pub is_ordered: bool,
    pub order_time: String,
    pub admin_modified: bool,
}

impl OrderWithDate {
    pub fn from_order(date: NaiveDate, order: &MealOrder) -> Self {
        Self {
            date,
            emp_id: order.emp_id.clone(),
            meal_type: order.meal_type,
            diet_type: order.diet_type,
            rice_portion: order.rice_portion,
            is_ordered: order.is_ordered,
            order_time: order.order_time.clone(),
            admin_modified: order.admin_modified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_type_serde() {
        assert_eq!(serde_json::to_string(&MealType::Lunch).unwrap(), "\"LUNCH\"");
        assert_eq!(
            serde_json::from_str::<MealType>("\"DINNER\"").unwrap(),
            MealType::Dinner
        );
        assert_eq!(serde_json::to_string(&DietType::Veg).unwrap(), "\"VEG\"");
        assert_eq!(serde_json::to_string(&RicePortion::Half).unwrap(), "\"HALF\"");
    }

    #[test]
    fn test_order_key_round_trip() {
        let key = OrderKey::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            "93800",
            MealType::Lunch,
        );
        let s = key.to_string();
        assert_eq!(s, "2024-03-01_93800_LUNCH");
        assert_eq!(OrderKey::parse(&s), Some(key));
    }

    #[test]
    fn test_order_key_rejects_malformed() {
        assert_eq!(OrderKey::parse(""), None);
        assert_eq!(OrderKey::parse("2024-03-01_93800"), None);
        assert_eq!(OrderKey::parse("2024-03-01_93800_BRUNCH"), None);
        assert_eq!(OrderKey::parse("notadate_93800_LUNCH"), None);
        assert_eq!(OrderKey::parse("2024-03-01_93_800_LUNCH"), None);
    }
}
