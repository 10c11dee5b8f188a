use crate::domain::{
    nutrition::entities::FoodRecord,
    taxonomy::value_objects::{CuisineGroup, FoodInsights, FoodSummary},
};

/// Read-only queries over the food catalog used to enrich recognition results.
#[cfg_attr(test, mockall::automock)]
pub trait FoodInsightService: Send + Sync {
    fn list_foods(&self) -> Vec<FoodSummary>;

    fn regional_foods(&self) -> Vec<CuisineGroup>;

    fn is_regional_food(&self, label: &str) -> bool;

    /// Unmodified nutrition record, or the default record for unknown labels.
    fn get_base_nutrition(&self, label: &str) -> FoodRecord;

    fn get_food_insights(&self, label: &str) -> FoodInsights;
}
