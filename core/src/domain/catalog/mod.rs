use std::sync::Arc;

use crate::domain::{
    common::entities::app_errors::CoreError, nutrition::table::NutritionTable,
    taxonomy::entities::Taxonomy,
};

/// Nutrition table and taxonomy, validated against each other once at startup
/// and shared read-only between every recognition call.
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    nutrition: Arc<NutritionTable>,
    taxonomy: Arc<Taxonomy>,
}

impl FoodCatalog {
    pub fn new(nutrition: NutritionTable, taxonomy: Taxonomy) -> Result<Self, CoreError> {
        if nutrition.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }

        if let Some(label) = taxonomy
            .priority()
            .iter()
            .find(|label| !taxonomy.is_regional(label))
        {
            return Err(CoreError::InvalidCatalog(format!(
                "priority food '{}' is not part of any cuisine",
                label
            )));
        }

        let catalog = Self {
            nutrition: Arc::new(nutrition),
            taxonomy: Arc::new(taxonomy),
        };

        catalog.ensure_known(catalog.taxonomy.regional().iter().map(String::as_str))?;
        catalog.ensure_known(
            catalog
                .taxonomy
                .visually_distinctive()
                .iter()
                .map(String::as_str),
        )?;

        Ok(catalog)
    }

    /// Fails on the first label without a nutrition record.
    pub fn ensure_known<'a>(
        &self,
        labels: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), CoreError> {
        for label in labels {
            if !self.nutrition.contains(label) {
                return Err(CoreError::InvalidCatalog(format!(
                    "food '{}' has no nutrition record",
                    label
                )));
            }
        }
        Ok(())
    }

    pub fn nutrition(&self) -> &Arc<NutritionTable> {
        &self.nutrition
    }

    pub fn taxonomy(&self) -> &Arc<Taxonomy> {
        &self.taxonomy
    }

    pub fn all_labels(&self) -> &[String] {
        self.nutrition.labels()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::domain::{
        nutrition::entities::FoodRecord,
        taxonomy::entities::{Cuisine, TaxonomyDefinition},
    };

    fn record() -> FoodRecord {
        FoodRecord {
            calories: 100.0,
            carbohydrates: 10.0,
            proteins: 5.0,
            fats: 2.0,
            fiber: 1.0,
            sugar: 1.0,
            serving_size: "1 serving".to_string(),
            serving_weight: 100.0,
        }
    }

    fn table(labels: &[&str]) -> NutritionTable {
        let foods: BTreeMap<String, FoodRecord> = labels
            .iter()
            .map(|label| (label.to_string(), record()))
            .collect();
        NutritionTable::new(labels[0].to_string(), foods).unwrap()
    }

    fn taxonomy(priority: &[&str], south_indian: &[&str]) -> Taxonomy {
        let mut cuisines = BTreeMap::new();
        cuisines.insert(
            Cuisine::SouthIndian,
            south_indian.iter().map(|s| s.to_string()).collect(),
        );

        Taxonomy::new(TaxonomyDefinition {
            priority: priority.iter().map(|s| s.to_string()).collect(),
            cuisines,
            ..Default::default()
        })
    }

    #[test]
    fn test_new_accepts_consistent_catalog() {
        let catalog = FoodCatalog::new(
            table(&["Apple", "Idli", "Sambhar"]),
            taxonomy(&["Idli"], &["Idli", "Sambhar"]),
        )
        .unwrap();

        assert_eq!(catalog.all_labels().len(), 3);
    }

    #[test]
    fn test_new_rejects_priority_outside_regional() {
        let result = FoodCatalog::new(
            table(&["Apple", "Idli", "Sambhar"]),
            taxonomy(&["Apple"], &["Idli", "Sambhar"]),
        );

        assert!(matches!(result, Err(CoreError::InvalidCatalog(_))));
    }

    #[test]
    fn test_new_rejects_regional_food_without_record() {
        let result = FoodCatalog::new(
            table(&["Apple", "Idli"]),
            taxonomy(&["Idli"], &["Idli", "Rasam"]),
        );

        assert_eq!(
            result.unwrap_err(),
            CoreError::InvalidCatalog("food 'Rasam' has no nutrition record".to_string())
        );
    }
}
