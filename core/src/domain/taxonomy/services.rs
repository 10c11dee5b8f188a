use crate::domain::{
    common::services::Service,
    nutrition::entities::FoodRecord,
    recognition::ports::ModelLatency,
    taxonomy::{
        ports::FoodInsightService,
        value_objects::{CuisineGroup, FoodInsights, FoodSummary},
    },
};

impl<L> FoodInsightService for Service<L>
where
    L: ModelLatency,
{
    fn list_foods(&self) -> Vec<FoodSummary> {
        let taxonomy = self.catalog.taxonomy();

        self.catalog
            .nutrition()
            .labels()
            .iter()
            .map(|label| FoodSummary {
                label: label.clone(),
                tier: taxonomy.tier_of(label),
                cuisine: taxonomy.cuisine_of(label),
            })
            .collect()
    }

    fn regional_foods(&self) -> Vec<CuisineGroup> {
        self.catalog
            .taxonomy()
            .cuisines()
            .iter()
            .map(|(cuisine, foods)| CuisineGroup {
                cuisine: *cuisine,
                foods: foods.clone(),
            })
            .collect()
    }

    fn is_regional_food(&self, label: &str) -> bool {
        self.catalog.taxonomy().is_regional(label)
    }

    fn get_base_nutrition(&self, label: &str) -> FoodRecord {
        self.catalog.nutrition().get_or_default(label).clone()
    }

    fn get_food_insights(&self, label: &str) -> FoodInsights {
        let taxonomy = self.catalog.taxonomy();

        FoodInsights {
            label: label.to_string(),
            tier: taxonomy.tier_of(label),
            cuisine: taxonomy.cuisine_of(label),
            regional: self.is_regional_food(label),
            nutritional_category: taxonomy.nutritional_category(label),
            related_foods: taxonomy.related_foods(label),
            similar_foods: taxonomy.similar_foods(label),
            visually_distinctive: taxonomy.is_visually_distinctive(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        application::create_test_service,
        domain::taxonomy::{
            entities::{Cuisine, FoodTier, NutritionalCategory},
            ports::FoodInsightService,
        },
    };

    #[test]
    fn test_list_foods_covers_every_tier() {
        let service = create_test_service();
        let foods = service.list_foods();

        assert!(foods.iter().any(|f| f.tier == FoodTier::Priority));
        assert!(foods.iter().any(|f| f.tier == FoodTier::Regional));
        assert!(foods.iter().any(|f| f.tier == FoodTier::General));
        assert!(foods.windows(2).all(|w| w[0].label < w[1].label));
    }

    #[test]
    fn test_insights_for_idli() {
        let service = create_test_service();
        let insights = service.get_food_insights("Idli");

        assert_eq!(insights.tier, FoodTier::Priority);
        assert_eq!(insights.cuisine, Some(Cuisine::SouthIndian));
        assert!(insights.regional);
        assert_eq!(insights.nutritional_category, NutritionalCategory::LowCalorie);
        assert_eq!(insights.related_foods, vec!["Sambhar", "Coconut Chutney"]);
        assert!(insights.similar_foods.contains(&"Steamed Rice Cake".to_string()));
        assert!(insights.visually_distinctive);
    }

    #[test]
    fn test_insights_for_unknown_food() {
        let service = create_test_service();
        let insights = service.get_food_insights("Moon Cheese");

        assert_eq!(insights.tier, FoodTier::General);
        assert_eq!(insights.cuisine, None);
        assert!(!insights.regional);
        assert_eq!(insights.nutritional_category, NutritionalCategory::Standard);
        assert!(insights.related_foods.is_empty());
        assert!(insights.similar_foods.is_empty());
    }

    #[test]
    fn test_base_nutrition_falls_back_to_default() {
        let service = create_test_service();
        let apple = service.get_base_nutrition("Apple");
        assert_eq!(service.get_base_nutrition("Moon Cheese"), apple);
        assert_eq!(apple.serving_size, "1 medium apple");
    }

    #[test]
    fn test_regional_foods_grouped_by_cuisine() {
        let service = create_test_service();
        let groups = service.regional_foods();

        assert_eq!(groups.first().map(|g| g.cuisine), Some(Cuisine::SouthIndian));
        assert!(service.is_regional_food("Pani Puri"));
        assert!(!service.is_regional_food("Hamburger"));
    }
}
