use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Recognition tier of a food label.
///
/// Tiers are nested: every Priority food is also Regional, and General is
/// everything outside the Regional set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FoodTier {
    Priority,
    Regional,
    General,
}

impl FoodTier {
    /// Half-width of the multiplicative noise applied to nutrition estimates.
    pub fn variation_range(&self) -> f64 {
        match self {
            FoodTier::Priority => 0.03,
            FoodTier::Regional => 0.05,
            FoodTier::General => 0.10,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FoodTier::Priority => "priority",
            FoodTier::Regional => "regional",
            FoodTier::General => "general",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum Cuisine {
    SouthIndian,
    NorthIndian,
    DalsAndLentils,
    RiceAndGrains,
    StreetFood,
    Beverages,
    Sweets,
    Sides,
}

/// Declaration order is the lookup order: a food listed under several
/// categories reports the first one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum NutritionalCategory {
    HighProtein,
    HighFiber,
    LowCalorie,
    Balanced,
    Indulgent,
    StreetFood,
    Healthy,
    Standard,
}

/// Serialized shape of the taxonomy document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaxonomyDefinition {
    pub priority: Vec<String>,
    pub cuisines: BTreeMap<Cuisine, Vec<String>>,
    pub visually_distinctive: Vec<String>,
    #[serde(default)]
    pub nutritional_categories: BTreeMap<NutritionalCategory, Vec<String>>,
    #[serde(default)]
    pub common_combos: Vec<Vec<String>>,
    #[serde(default)]
    pub related_foods: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub similar_foods: BTreeMap<String, Vec<String>>,
}

/// Static grouping of food labels into tiers and informational categories.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    priority: Vec<String>,
    regional: Vec<String>,
    cuisines: BTreeMap<Cuisine, Vec<String>>,
    visually_distinctive: Vec<String>,
    nutritional_categories: BTreeMap<NutritionalCategory, Vec<String>>,
    common_combos: Vec<Vec<String>>,
    related_foods: BTreeMap<String, Vec<String>>,
    similar_foods: BTreeMap<String, Vec<String>>,
}

impl Taxonomy {
    pub fn new(definition: TaxonomyDefinition) -> Self {
        let mut regional: Vec<String> = Vec::new();
        for label in definition.cuisines.values().flatten() {
            if !regional.contains(label) {
                regional.push(label.clone());
            }
        }

        Self {
            priority: definition.priority,
            regional,
            cuisines: definition.cuisines,
            visually_distinctive: definition.visually_distinctive,
            nutritional_categories: definition.nutritional_categories,
            common_combos: definition.common_combos,
            related_foods: definition.related_foods,
            similar_foods: definition.similar_foods,
        }
    }

    pub fn priority(&self) -> &[String] {
        &self.priority
    }

    /// Union of all cuisine groups, Priority foods included.
    pub fn regional(&self) -> &[String] {
        &self.regional
    }

    pub fn cuisines(&self) -> &BTreeMap<Cuisine, Vec<String>> {
        &self.cuisines
    }

    pub fn visually_distinctive(&self) -> &[String] {
        &self.visually_distinctive
    }

    pub fn is_priority(&self, label: &str) -> bool {
        self.priority.iter().any(|l| l == label)
    }

    pub fn is_regional(&self, label: &str) -> bool {
        self.regional.iter().any(|l| l == label)
    }

    pub fn is_visually_distinctive(&self, label: &str) -> bool {
        self.visually_distinctive.iter().any(|l| l == label)
    }

    pub fn tier_of(&self, label: &str) -> FoodTier {
        if self.is_priority(label) {
            FoodTier::Priority
        } else if self.is_regional(label) {
            FoodTier::Regional
        } else {
            FoodTier::General
        }
    }

    pub fn cuisine_of(&self, label: &str) -> Option<Cuisine> {
        self.cuisines
            .iter()
            .find(|(_, foods)| foods.iter().any(|f| f == label))
            .map(|(cuisine, _)| *cuisine)
    }

    pub fn nutritional_category(&self, label: &str) -> NutritionalCategory {
        self.nutritional_categories
            .iter()
            .find(|(_, foods)| foods.iter().any(|f| f == label))
            .map(|(category, _)| *category)
            .unwrap_or(NutritionalCategory::Standard)
    }

    /// Foods commonly eaten together with `label`.
    ///
    /// The first combo containing the label wins; standalone pairings are
    /// only consulted when no combo matches.
    pub fn related_foods(&self, label: &str) -> Vec<String> {
        if let Some(combo) = self
            .common_combos
            .iter()
            .find(|combo| combo.iter().any(|f| f == label))
        {
            return combo.iter().filter(|f| *f != label).cloned().collect();
        }

        self.related_foods.get(label).cloned().unwrap_or_default()
    }

    pub fn similar_foods(&self, label: &str) -> Vec<String> {
        self.similar_foods.get(label).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn taxonomy() -> Taxonomy {
        let mut cuisines = BTreeMap::new();
        cuisines.insert(Cuisine::SouthIndian, strings(&["Idli", "Sambhar", "Medu Vada"]));
        cuisines.insert(Cuisine::StreetFood, strings(&["Samosa", "Pani Puri", "Idli"]));

        let mut nutritional_categories = BTreeMap::new();
        nutritional_categories.insert(NutritionalCategory::Healthy, strings(&["Idli"]));
        nutritional_categories.insert(NutritionalCategory::LowCalorie, strings(&["Idli", "Sambhar"]));

        let mut related_foods = BTreeMap::new();
        related_foods.insert("Samosa".to_string(), strings(&["Masala Chai"]));
        related_foods.insert("Idli".to_string(), strings(&["Never Used"]));

        let mut similar_foods = BTreeMap::new();
        similar_foods.insert("Idli".to_string(), strings(&["Dhokla", "Steamed Rice Cake"]));

        Taxonomy::new(TaxonomyDefinition {
            priority: strings(&["Idli", "Samosa"]),
            cuisines,
            visually_distinctive: strings(&["Pani Puri"]),
            nutritional_categories,
            common_combos: vec![strings(&["Idli", "Sambhar", "Coconut Chutney"])],
            related_foods,
            similar_foods,
        })
    }

    #[test]
    fn test_regional_is_deduplicated_union() {
        assert_eq!(
            taxonomy().regional(),
            strings(&["Idli", "Sambhar", "Medu Vada", "Samosa", "Pani Puri"]).as_slice()
        );
    }

    #[test]
    fn test_tier_of() {
        let taxonomy = taxonomy();
        assert_eq!(taxonomy.tier_of("Idli"), FoodTier::Priority);
        assert_eq!(taxonomy.tier_of("Sambhar"), FoodTier::Regional);
        assert_eq!(taxonomy.tier_of("Apple"), FoodTier::General);
    }

    #[test]
    fn test_variation_range_per_tier() {
        assert_eq!(FoodTier::Priority.variation_range(), 0.03);
        assert_eq!(FoodTier::Regional.variation_range(), 0.05);
        assert_eq!(FoodTier::General.variation_range(), 0.10);
    }

    #[test]
    fn test_nutritional_category_uses_declaration_order() {
        let taxonomy = taxonomy();
        assert_eq!(
            taxonomy.nutritional_category("Idli"),
            NutritionalCategory::LowCalorie
        );
        assert_eq!(
            taxonomy.nutritional_category("Apple"),
            NutritionalCategory::Standard
        );
    }

    #[test]
    fn test_related_foods_prefers_combos() {
        let taxonomy = taxonomy();
        assert_eq!(
            taxonomy.related_foods("Idli"),
            strings(&["Sambhar", "Coconut Chutney"])
        );
        assert_eq!(taxonomy.related_foods("Samosa"), strings(&["Masala Chai"]));
        assert!(taxonomy.related_foods("Apple").is_empty());
    }

    #[test]
    fn test_cuisine_and_similar_foods() {
        let taxonomy = taxonomy();
        assert_eq!(taxonomy.cuisine_of("Idli"), Some(Cuisine::SouthIndian));
        assert_eq!(taxonomy.cuisine_of("Pani Puri"), Some(Cuisine::StreetFood));
        assert_eq!(taxonomy.cuisine_of("Apple"), None);
        assert_eq!(
            taxonomy.similar_foods("Idli"),
            strings(&["Dhokla", "Steamed Rice Cake"])
        );
    }
}
