use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::{
    catalog::FoodCatalog,
    common::entities::app_errors::CoreError,
    nutrition::{entities::FoodRecord, table::NutritionTable},
    taxonomy::entities::{Taxonomy, TaxonomyDefinition},
};

static NUTRITION_JSON: &str = include_str!("../../../data/nutrition.json");
static TAXONOMY_JSON: &str = include_str!("../../../data/taxonomy.json");

#[derive(Deserialize)]
struct NutritionDocument {
    default_label: String,
    foods: BTreeMap<String, FoodRecord>,
}

/// Builds the catalog compiled into the binary.
pub fn load_embedded_catalog() -> Result<FoodCatalog, CoreError> {
    load_catalog(NUTRITION_JSON, TAXONOMY_JSON)
}

pub fn load_catalog(nutrition_json: &str, taxonomy_json: &str) -> Result<FoodCatalog, CoreError> {
    let nutrition = parse_nutrition_table(nutrition_json)?;
    let taxonomy = parse_taxonomy(taxonomy_json)?;

    let catalog = FoodCatalog::new(nutrition, taxonomy)?;

    tracing::debug!(
        foods = catalog.all_labels().len(),
        regional = catalog.taxonomy().regional().len(),
        priority = catalog.taxonomy().priority().len(),
        "food catalog loaded"
    );

    Ok(catalog)
}

pub fn parse_nutrition_table(json: &str) -> Result<NutritionTable, CoreError> {
    let document: NutritionDocument = serde_json::from_str(json).map_err(|e| {
        tracing::error!("Failed to parse nutrition table: {}", e);
        CoreError::CatalogParse(format!("nutrition table: {}", e))
    })?;

    NutritionTable::new(document.default_label, document.foods)
}

pub fn parse_taxonomy(json: &str) -> Result<Taxonomy, CoreError> {
    let definition: TaxonomyDefinition = serde_json::from_str(json).map_err(|e| {
        tracing::error!("Failed to parse taxonomy: {}", e);
        CoreError::CatalogParse(format!("taxonomy: {}", e))
    })?;

    Ok(Taxonomy::new(definition))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{recognition::patterns::PatternMatcher, taxonomy::entities::FoodTier};

    #[test]
    fn test_embedded_catalog_is_consistent() {
        let catalog = load_embedded_catalog().unwrap();

        assert_eq!(catalog.nutrition().default_label(), "Apple");
        assert!(catalog.all_labels().len() > 60);
        catalog
            .ensure_known(PatternMatcher::default().labels())
            .unwrap();
    }

    #[test]
    fn test_embedded_tiers_are_nested() {
        let catalog = load_embedded_catalog().unwrap();
        let taxonomy = catalog.taxonomy();

        for label in taxonomy.priority() {
            assert!(taxonomy.is_regional(label), "{label}");
        }
        assert_eq!(taxonomy.tier_of("Idli"), FoodTier::Priority);
        assert_eq!(taxonomy.tier_of("Rasam"), FoodTier::Regional);
        assert_eq!(taxonomy.tier_of("Hamburger"), FoodTier::General);
    }

    #[test]
    fn test_embedded_records_are_positive() {
        let catalog = load_embedded_catalog().unwrap();
        let table = catalog.nutrition();

        for label in table.labels() {
            let record = table.get(label).unwrap();
            assert!(record.calories > 0.0, "{label}");
            assert!(record.serving_weight > 0.0, "{label}");
            assert!(!record.serving_size.is_empty(), "{label}");
        }
    }

    #[test]
    fn test_load_catalog_rejects_malformed_json() {
        let result = load_catalog("{ not json", TAXONOMY_JSON);
        assert!(matches!(result, Err(CoreError::CatalogParse(_))));
    }

    #[test]
    fn test_load_catalog_rejects_empty_table() {
        let result = load_catalog(r#"{ "default_label": "Apple", "foods": {} }"#, TAXONOMY_JSON);
        assert_eq!(result.unwrap_err(), CoreError::EmptyCatalog);
    }
}
