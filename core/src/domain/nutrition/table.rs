use std::collections::BTreeMap;

use crate::domain::{common::entities::app_errors::CoreError, nutrition::entities::FoodRecord};

/// Read-only lookup from food label to its base nutrition facts.
#[derive(Debug, Clone)]
pub struct NutritionTable {
    default_label: String,
    foods: BTreeMap<String, FoodRecord>,
    labels: Vec<String>,
}

impl NutritionTable {
    pub fn new(
        default_label: String,
        foods: BTreeMap<String, FoodRecord>,
    ) -> Result<Self, CoreError> {
        if foods.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }

        if !foods.contains_key(&default_label) {
            return Err(CoreError::InvalidCatalog(format!(
                "default food '{}' has no nutrition record",
                default_label
            )));
        }

        let labels = foods.keys().cloned().collect();

        Ok(Self {
            default_label,
            foods,
            labels,
        })
    }

    pub fn get(&self, label: &str) -> Option<&FoodRecord> {
        self.foods.get(label)
    }

    /// Looks up `label`, falling back to the default record for unknown foods.
    pub fn get_or_default(&self, label: &str) -> &FoodRecord {
        self.foods
            .get(label)
            .unwrap_or_else(|| self.default_record())
    }

    pub fn default_label(&self) -> &str {
        &self.default_label
    }

    pub fn default_record(&self) -> &FoodRecord {
        // presence checked in `new`
        &self.foods[&self.default_label]
    }

    pub fn contains(&self, label: &str) -> bool {
        self.foods.contains_key(label)
    }

    /// Every known label, in sorted order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(calories: f64, serving_size: &str) -> FoodRecord {
        FoodRecord {
            calories,
            carbohydrates: 10.0,
            proteins: 1.0,
            fats: 0.5,
            fiber: 2.0,
            sugar: 5.0,
            serving_size: serving_size.to_string(),
            serving_weight: 100.0,
        }
    }

    fn table() -> NutritionTable {
        let mut foods = BTreeMap::new();
        foods.insert("Apple".to_string(), record(95.0, "1 medium apple"));
        foods.insert("Idli".to_string(), record(116.0, "2 pieces"));
        NutritionTable::new("Apple".to_string(), foods).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_table() {
        let result = NutritionTable::new("Apple".to_string(), BTreeMap::new());
        assert_eq!(result.unwrap_err(), CoreError::EmptyCatalog);
    }

    #[test]
    fn test_new_rejects_missing_default() {
        let mut foods = BTreeMap::new();
        foods.insert("Idli".to_string(), record(116.0, "2 pieces"));
        let result = NutritionTable::new("Apple".to_string(), foods);
        assert!(matches!(result, Err(CoreError::InvalidCatalog(_))));
    }

    #[test]
    fn test_get_or_default_falls_back() {
        let table = table();
        assert_eq!(table.get_or_default("Idli").serving_size, "2 pieces");
        assert_eq!(
            table.get_or_default("Unknown Curry").serving_size,
            "1 medium apple"
        );
        assert!(table.get("Unknown Curry").is_none());
    }

    #[test]
    fn test_labels_are_sorted() {
        assert_eq!(table().labels(), &["Apple".to_string(), "Idli".to_string()]);
    }
}
