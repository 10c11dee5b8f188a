pub mod get_food_insights;
pub mod get_food_nutrition;
pub mod get_regional_foods;
pub mod list_foods;
