use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::taxonomy::entities::{Cuisine, FoodTier, NutritionalCategory};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodSummary {
    pub label: String,
    pub tier: FoodTier,
    pub cuisine: Option<Cuisine>,
}

/// Display enrichment for a recognized food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodInsights {
    pub label: String,
    pub tier: FoodTier,
    pub cuisine: Option<Cuisine>,
    /// Part of any cuisine group, Priority foods included.
    pub regional: bool,
    pub nutritional_category: NutritionalCategory,
    pub related_foods: Vec<String>,
    pub similar_foods: Vec<String>,
    pub visually_distinctive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CuisineGroup {
    pub cuisine: Cuisine,
    pub foods: Vec<String>,
}
