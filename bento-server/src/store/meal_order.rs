//! Meal order repository
//!
//! Thin access layer over the flat order book. Business rules (cutoffs,
//! permission checks) live in the order service; this layer only knows keys
//! and records.

use shared::AppResult;
use shared::models::{MealOrder, OrderKey};

use super::JsonStore;

/// Order-book data access
#[derive(Debug, Clone)]
pub struct MealOrderRepository {
    store: JsonStore,
}

impl MealOrderRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Fetch a single active order. Tombstones (`is_ordered = false`) read as
    /// absent.
    pub fn get(&self, key: &OrderKey) -> Option<MealOrder> {
        self.store
            .load_orders()
            .remove(&key.to_string())
            .filter(|o| o.is_ordered)
    }

    /// Insert or overwrite the order under its key
    pub fn upsert(&self, key: &OrderKey, order: MealOrder) -> AppResult<()> {
        let mut orders = self.store.load_orders();
        orders.insert(key.to_string(), order);
        self.store.save_orders(&orders)?;
        Ok(())
    }

    /// Remove an order. Removing a missing key is not an error.
    pub fn remove(&self, key: &OrderKey) -> AppResult<bool> {
        let mut orders = self.store.load_orders();
        let removed = orders.remove(&key.to_string()).is_some();
        if removed {
            self.store.save_orders(&orders)?;
        }
        Ok(removed)
    }

    /// All active orders with their parsed keys. Malformed keys and tombstones
    /// are skipped.
    pub fn active_entries(&self) -> Vec<(OrderKey, MealOrder)> {
        self.store
            .load_orders()
            .into_iter()
            .filter(|(_, order)| order.is_ordered)
            .filter_map(|(key, order)| OrderKey::parse(&key).map(|k| (k, order)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::{DietType, MealType, RicePortion};
    use tempfile::TempDir;

    fn repo() -> (TempDir, MealOrderRepository) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        (dir, MealOrderRepository::new(store))
    }

    fn sample_order(emp_id: &str, meal_type: MealType) -> MealOrder {
        MealOrder {
            emp_id: emp_id.into(),
            meal_type,
            diet_type: DietType::Meat,
            rice_portion: RicePortion::Full,
            is_ordered: true,
            order_time: "07:15:00".into(),
            admin_modified: false,
        }
    }

    fn key(date: (i32, u32, u32), emp_id: &str, meal_type: MealType) -> OrderKey {
        OrderKey::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            emp_id,
            meal_type,
        )
    }

    #[test]
    fn test_upsert_overwrites() {
        let (_dir, repo) = repo();
        let k = key((2024, 3, 1), "93800", MealType::Lunch);

        repo.upsert(&k, sample_order("93800", MealType::Lunch))
            .unwrap();
        let mut updated = sample_order("93800", MealType::Lunch);
        updated.diet_type = DietType::Veg;
        repo.upsert(&k, updated).unwrap();

        let stored = repo.get(&k).unwrap();
        assert_eq!(stored.diet_type, DietType::Veg);
        assert_eq!(repo.active_entries().len(), 1);
    }

    #[test]
    fn test_tombstone_reads_as_absent() {
        let (_dir, repo) = repo();
        let k = key((2024, 3, 1), "93800", MealType::Lunch);
        let mut order = sample_order("93800", MealType::Lunch);
        order.is_ordered = false;
        repo.upsert(&k, order).unwrap();

        assert!(repo.get(&k).is_none());
        assert!(repo.active_entries().is_empty());
    }

    #[test]
    fn test_remove() {
        let (_dir, repo) = repo();
        let k = key((2024, 3, 1), "93800", MealType::Dinner);
        repo.upsert(&k, sample_order("93800", MealType::Dinner))
            .unwrap();
        assert!(repo.remove(&k).unwrap());
        assert!(!repo.remove(&k).unwrap());
        assert!(repo.get(&k).is_none());
    }

    #[test]
    fn test_malformed_keys_skipped_by_scan() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        let repo = MealOrderRepository::new(store.clone());

        let k = key((2024, 3, 1), "93800", MealType::Lunch);
        repo.upsert(&k, sample_order("93800", MealType::Lunch))
            .unwrap();

        let mut orders = store.load_orders();
        orders.insert("garbage-key".into(), sample_order("93800", MealType::Lunch));
        store.save_orders(&orders).unwrap();

        assert_eq!(repo.active_entries().len(), 1);
    }
}
